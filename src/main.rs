// Entry point and console flow.
//
// One run generates a fresh statistics record, exports it to JSON, CSV and
// XLSX, then prints a short Spanish summary of the headline figures.
mod error;
mod generator;
mod output;
mod types;
mod util;

use clap::Parser;
use std::error::Error;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use types::CoffeeStatistics;

#[derive(Parser, Debug)]
#[command(
    name = "coffee_stats",
    version,
    about = "Generate mock Colombian coffee production statistics"
)]
struct Cli {
    /// Directory that receives the JSON, CSV and XLSX files.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
    /// Seed for reproducible monthly figures.
    #[arg(long)]
    seed: Option<u64>,
    /// Monthly rows shown in the console preview.
    #[arg(long, default_value_t = 3)]
    preview_rows: usize,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn print_exported(paths: &output::ExportPaths) {
    println!("✅ Datos exportados exitosamente:");
    println!("📄 {}", paths.json.display());
    println!("📊 {}", paths.monthly_csv.display());
    println!("🗺️ {}", paths.regional_csv.display());
    println!("📈 {}", paths.workbook.display());
}

fn print_summary(stats: &CoffeeStatistics) {
    let base = &stats.base_statistics;
    println!("\n📊 RESUMEN DE ESTADÍSTICAS GENERADAS:");
    println!(
        "📈 Proyección 2025: {} mil sacos",
        util::format_int(base.annual_projection_2025)
    );
    println!("📊 Producción 2024: {} mil sacos", util::format_int(base.annual_2024));
    println!("📈 Crecimiento: {}%", util::format_number(base.growth_rate * 100.0, 1));
    println!("👨‍🌾 Familias cafeteras: {}", util::format_int(base.coffee_families));
    println!(
        "💰 Valor exportado: ${}B USD",
        util::format_number(base.export_value_billions, 1)
    );
    println!("☕ Café Arábica: {}%", base.arabica_percentage);

    println!("\n🗺️ Principales regiones productoras:");
    for region in stats.regional_distribution.iter().take(5) {
        println!(
            "   • {}: {}% (Calidad: {}/100)",
            region.name, region.percentage, region.quality_score
        );
    }

    let projections = &stats.projections_2025;
    println!("\n🔮 Proyecciones 2025:");
    println!(
        "   • Cosecha principal: {} mil sacos",
        util::format_int(projections.main_harvest.projected_bags)
    );
    println!(
        "   • Mitaca: {} mil sacos",
        util::format_int(projections.mitaca_harvest.projected_bags)
    );
    println!(
        "   • Total proyectado: {} mil sacos",
        util::format_int(projections.total_projected_bags())
    );
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing();

    println!("🚀 Generando estadísticas del café colombiano...");
    let stats = match cli.seed {
        Some(seed) => generator::generate_seeded(seed),
        None => generator::generate_statistics(),
    };
    tracing::info!(
        generated_date = %stats.metadata.generated_date,
        seeded = cli.seed.is_some(),
        "statistics generated"
    );

    let paths = output::export_to_formats(&stats, &cli.out_dir)?;
    print_exported(&paths);

    println!("\nProducción mensual 2024 (vista previa):\n");
    output::preview_table_rows(&stats.monthly_data_2024, cli.preview_rows);

    print_summary(&stats);
    Ok(())
}
