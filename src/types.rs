use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Root record assembled once per run and handed read-only to the exporter.
///
/// Field order matches the key order of the exported JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoffeeStatistics {
    pub metadata: Metadata,
    pub base_statistics: BaseStatistics,
    pub monthly_data_2024: Vec<MonthlyRecord>,
    pub regional_distribution: Vec<RegionalShare>,
    pub quality_classification: Vec<QualityGrade>,
    pub climate_factors: ClimateFactors,
    pub projections_2025: Projections2025,
    pub risk_factors: Vec<RiskFactor>,
    pub opportunities: Vec<Opportunity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub generated_date: String,
    pub source: String,
    pub version: String,
}

/// National figures; production values are in thousand 60 kg bags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseStatistics {
    pub annual_projection_2025: u32,
    pub annual_2024: u32,
    pub growth_rate: f64,
    pub arabica_percentage: u32,
    pub coffee_families: u32,
    pub export_value_billions: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tabled)]
pub struct MonthlyRecord {
    #[tabled(rename = "Mes")]
    pub month: String,
    #[tabled(rename = "Abrev.")]
    pub month_short: String,
    #[tabled(rename = "Producción")]
    pub production: u32,
    #[tabled(rename = "Exportaciones")]
    pub exports: u32,
    #[tabled(rename = "Precio USD/lb")]
    pub price_usd_lb: f64,
    #[tabled(rename = "Prima calidad")]
    pub quality_premium: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tabled)]
pub struct RegionalShare {
    #[tabled(rename = "Región")]
    pub name: String,
    #[tabled(rename = "%")]
    pub percentage: f64,
    #[tabled(rename = "Calidad")]
    pub quality_score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityGrade {
    pub grade: String,
    pub percentage: u32,
    pub price_premium: i32,
}

/// Agronomic ranges are `[min, max]` pairs; the impacts are percentage
/// changes in production.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateFactors {
    pub temperature_optimal_range: [u32; 2],
    pub rainfall_optimal_mm: [u32; 2],
    pub altitude_optimal_m: [u32; 2],
    pub el_nino_impact: i32,
    pub la_nina_impact: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projections2025 {
    pub main_harvest: HarvestProjection,
    pub mitaca_harvest: HarvestProjection,
    pub price_projections: QuarterlyPrices,
}

impl Projections2025 {
    /// Main harvest plus mitaca, in thousand bags.
    pub fn total_projected_bags(&self) -> u32 {
        self.main_harvest.projected_bags + self.mitaca_harvest.projected_bags
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarvestProjection {
    pub period: String,
    pub projected_bags: u32,
    pub confidence: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarterlyPrices {
    #[serde(rename = "Q1")]
    pub q1: PriceRange,
    #[serde(rename = "Q2")]
    pub q2: PriceRange,
    #[serde(rename = "Q3")]
    pub q3: PriceRange,
    #[serde(rename = "Q4")]
    pub q4: PriceRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
    pub trend: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub factor: String,
    pub impact_level: String,
    pub probability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub opportunity: String,
    pub growth_potential: String,
    pub market_size: String,
}
