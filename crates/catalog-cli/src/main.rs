mod logger;

use anyhow::{Context, Result};
use catalog_layout::{AlphaPolicy, CatalogInput, CatalogOptions, PaperSize};
use clap::{Args, Parser, Subcommand, ValueEnum};
use logger::CliLogger;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pcat", about = "Product catalog PDF generator", version)]
struct Cli {
    /// Log per-page details
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a catalog PDF from a logo and a product manifest
    Build {
        /// Company logo image
        #[arg(long)]
        logo: PathBuf,

        /// Company name printed on the cover
        #[arg(long)]
        company: String,

        /// Product manifest CSV (columns: name, price, description, images)
        #[arg(short, long)]
        manifest: PathBuf,

        /// Output PDF file
        #[arg(short, long, default_value = catalog_pdf::DEFAULT_OUTPUT_NAME)]
        output: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Currency symbol printed before prices
        #[arg(long)]
        currency: Option<String>,

        /// How transparent logo pixels count toward the background choice
        #[arg(long, value_enum)]
        alpha: Option<AlphaArg>,

        /// Save the effective options to this JSON file
        #[arg(long)]
        save_config: Option<PathBuf>,
    },

    /// Show page counts for a product manifest
    Stats {
        /// Product manifest CSV
        #[arg(short, long)]
        manifest: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,
    },
}

/// Layout flags shared by every command; they override `--config`
#[derive(Args)]
struct LayoutArgs {
    /// Options JSON file to start from
    #[arg(long)]
    config: Option<PathBuf>,

    /// Paper size
    #[arg(long, value_enum)]
    paper: Option<PaperArg>,

    /// Grid rows per page
    #[arg(long)]
    rows: Option<usize>,

    /// Grid columns per page
    #[arg(long)]
    cols: Option<usize>,

    /// Page margin in points
    #[arg(long)]
    margin: Option<f32>,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A4,
    A5,
    Letter,
}

#[derive(Clone, Copy, ValueEnum)]
enum AlphaArg {
    Composite,
    Ignore,
}

impl From<PaperArg> for PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
        }
    }
}

impl From<AlphaArg> for AlphaPolicy {
    fn from(arg: AlphaArg) -> Self {
        match arg {
            AlphaArg::Composite => Self::CompositeOverWhite,
            AlphaArg::Ignore => Self::Ignore,
        }
    }
}

impl LayoutArgs {
    async fn resolve(&self) -> Result<CatalogOptions> {
        let mut options = match &self.config {
            Some(path) => CatalogOptions::load(path)
                .await
                .with_context(|| format!("loading {}", path.display()))?,
            None => CatalogOptions::default(),
        };

        if let Some(paper) = self.paper {
            options.paper_size = paper.into();
        }
        if let Some(rows) = self.rows {
            options.grid.rows = rows;
        }
        if let Some(cols) = self.cols {
            options.grid.cols = cols;
        }
        if let Some(margin) = self.margin {
            options.grid.margin = margin;
        }

        options.validate()?;
        Ok(options)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    CliLogger::new(cli.verbose).init()?;

    match cli.command {
        Commands::Build {
            logo,
            company,
            manifest,
            output,
            layout,
            currency,
            alpha,
            save_config,
        } => {
            let mut options = layout.resolve().await?;
            if let Some(currency) = currency {
                options.currency_symbol = currency;
            }
            if let Some(alpha) = alpha {
                options.alpha_policy = alpha.into();
            }
            if let Some(path) = save_config {
                options.save(&path).await?;
                log::info!("Saved options to {}", path.display());
            }

            let logo = catalog_pdf::load_image(&logo)
                .await
                .with_context(|| format!("loading logo {}", logo.display()))?;
            let products = catalog_pdf::load_manifest(&manifest).await?;

            let input = CatalogInput {
                company_name: company,
                logo: Some(logo),
                products,
            };
            let catalog = catalog_layout::build_catalog(&input, &options)?;
            catalog_pdf::generate_pdf(&catalog, &output).await?;

            println!(
                "Generated {} pages for {} products → {}",
                catalog.pages.len(),
                input.products.len(),
                output.display()
            );
        }

        Commands::Stats { manifest, layout } => {
            let options = layout.resolve().await?;
            let entries = catalog_pdf::read_manifest(&manifest).await?;
            let image_counts: Vec<usize> =
                entries.iter().map(|entry| entry.image_paths.len()).collect();
            let stats = catalog_layout::calculate_statistics_for_counts(&image_counts, &options)?;

            println!("Catalog Statistics:");
            println!("  Products: {}", stats.products);
            println!("  Grid entries: {}", stats.rows);
            println!("  Cells per page: {}", stats.cells_per_page);
            println!("  Product pages: {}", stats.product_pages);
            println!("  Total pages (with cover): {}", stats.total_pages);
            println!("  Empty cells on last page: {}", stats.empty_cells);
        }
    }

    Ok(())
}
