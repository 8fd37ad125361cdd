use crate::core::cmake_generator::build_cmake_output;
use crate::domain::models::{GeneratorConfig, Layout, RootDir};
use crate::infra::file_system::enumerate;
use crate::infra::logger::setup_logger;
use crate::infra::output::{ProgressTarget, print_discovered, remove_previous_output, write_output};
use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, info};
use std::path::Path;

#[derive(Parser)]
#[command(name = "cmake-filelist")]
#[command(about = "List C/C++ headers and sources into a CMake include file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    Generate {
        #[arg(long, default_value = "Include")]
        header_root: String,

        #[arg(long, default_value = "Source")]
        source_root: String,

        #[arg(long, default_value = "./cmake/source-files.cmake")]
        output: String,

        #[arg(long, value_enum, default_value_t = LayoutArg::Merged)]
        layout: LayoutArg,

        /// Write the generated file to stdout instead of --output
        #[arg(long)]
        stdout: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    /// HEADER_FILES and SOURCE_FILES combined across both roots
    Merged,
    /// One block per root directory
    PerRoot,
}

impl From<LayoutArg> for Layout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Merged => Layout::Merged,
            LayoutArg::PerRoot => Layout::PerRoot,
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logger(cli.verbose)?;

    match cli.command {
        Commands::Generate {
            header_root,
            source_root,
            output,
            layout,
            stdout,
        } => {
            info!("Starting generate command");
            debug!(
                "Command parameters: header_root={}, source_root={}, output={}, layout={:?}, stdout={}",
                header_root, source_root, output, layout, stdout
            );

            let config = GeneratorConfig {
                roots: vec![
                    RootDir::new(header_root, "header"),
                    RootDir::new(source_root, "source"),
                ],
                output_path: if stdout { None } else { Some(output) },
                layout: layout.into(),
            };

            generate(&config)?;
        }
    }
    Ok(())
}

pub fn generate(config: &GeneratorConfig) -> anyhow::Result<()> {
    if let Some(path) = &config.output_path {
        remove_previous_output(Path::new(path))?;
    }

    let mut progress = ProgressTarget::for_output(&config.output_path).writer();

    let mut listings = Vec::with_capacity(config.roots.len());
    for root in &config.roots {
        info!("Scanning for files in {}", root.path.display());
        let listing = enumerate(&root.path)?;
        if listing.is_empty() {
            info!("No C/C++ files found in {}", root.path.display());
        }
        print_discovered(&mut progress, root, &listing)?;
        listings.push((root.clone(), listing));
    }

    info!("Building CMake output with {:?} layout", config.layout);
    let content = build_cmake_output(&listings, config.layout);

    info!("Writing output");
    write_output(&content, config.output_path.clone())
}
