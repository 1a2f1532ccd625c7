use super::{parse_bbox, SitewatchCliError};
use crate::{
    collection::{filter::Bbox, run_preprocess},
    config::{PreprocessConfiguration, SiteConfiguration},
    site::{write_sites, JoinKey, SiteContext},
};
use clap::{Parser, Subcommand};
use std::path::Path;

/// Command line tool for preparing building footprints and deriving construction-site compliance
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct SitewatchApp {
    #[command(subcommand)]
    pub op: SitewatchOperation,
}

#[derive(Debug, Clone, Subcommand)]
pub enum SitewatchOperation {
    /// filter, validate, and simplify building footprints into a GeoJSON FeatureCollection
    Preprocess {
        #[arg(long, help = "path to the gzip-compressed building footprint CSV")]
        input: String,
        #[arg(long, help = "output path for the footprint GeoJSON")]
        output: Option<String>,
        #[arg(long, help = "path to .toml or .json file with preprocessing parameters")]
        configuration_file: Option<String>,
        #[arg(long, value_parser = parse_bbox, help = "region of interest as lon_min,lon_max,lat_min,lat_max")]
        bbox: Option<Bbox>,
        #[arg(long, help = "minimum confidence score of a retained building")]
        confidence_threshold: Option<f64>,
        #[arg(long, help = "simplification tolerance, in degrees")]
        simplify_tolerance: Option<f64>,
    },
    /// derive construction sites from exported footprints and a compliance report
    Sites {
        #[arg(long, help = "path to .toml or .json file with site parameters")]
        configuration_file: Option<String>,
        #[arg(long, help = "footprint GeoJSON written by the preprocess step")]
        footprints: Option<String>,
        #[arg(long, help = "GeoJSON of detected construction boundaries")]
        detections: Option<String>,
        #[arg(long, help = "compliance report CSV")]
        compliance: Option<String>,
        #[arg(long, value_enum, help = "how footprints are matched to compliance rows")]
        join_key: Option<JoinKey>,
        #[arg(long, help = "write sites to this CSV file instead of stdout")]
        output: Option<String>,
    },
}

impl SitewatchOperation {
    pub fn run(&self) -> Result<(), SitewatchCliError> {
        match self {
            SitewatchOperation::Preprocess {
                input,
                output,
                configuration_file,
                bbox,
                confidence_threshold,
                simplify_tolerance,
            } => {
                let mut conf = match configuration_file {
                    None => Ok(PreprocessConfiguration::default()),
                    Some(f) => {
                        log::info!("reading preprocessing configuration from {f}");
                        PreprocessConfiguration::try_from(f)
                    }
                }?;
                if let Some(output) = output {
                    conf.output_file = output.clone();
                }
                if let Some(bbox) = bbox {
                    conf.bbox = *bbox;
                }
                if let Some(threshold) = confidence_threshold {
                    conf.confidence_threshold = *threshold;
                }
                if let Some(tolerance) = simplify_tolerance {
                    conf.simplify_tolerance = *tolerance;
                }
                log::info!(
                    "preprocessing {input} with confidence >= {}, bbox {}, tolerance {}",
                    conf.confidence_threshold,
                    conf.bbox,
                    conf.simplify_tolerance
                );
                let summary = run_preprocess(Path::new(input), &conf)?;
                println!(
                    "Pre-processing complete. Reduced to {} buildings.",
                    summary.retained
                );
                Ok(())
            }
            SitewatchOperation::Sites {
                configuration_file,
                footprints,
                detections,
                compliance,
                join_key,
                output,
            } => {
                let mut conf = match configuration_file {
                    None => Ok(SiteConfiguration::default()),
                    Some(f) => {
                        log::info!("reading site configuration from {f}");
                        SiteConfiguration::try_from(f)
                    }
                }?;
                if let Some(footprints) = footprints {
                    conf.footprints_file = footprints.clone();
                }
                if let Some(detections) = detections {
                    conf.detections_file = Some(detections.clone());
                }
                if let Some(compliance) = compliance {
                    conf.compliance_file = Some(compliance.clone());
                }
                if let Some(join_key) = join_key {
                    conf.join_key = *join_key;
                }
                let context = SiteContext::load(&conf)?;
                write_sites(output.as_deref().map(Path::new), context.sites())?;
                eprintln!("{}", context.summary());
                Ok(())
            }
        }
    }
}
