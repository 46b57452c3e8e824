// Builds the mock statistics record.
//
// Only the monthly section is sampled; every other section is a fixed table
// cloned into the record. Production follows the Colombian harvest calendar:
// main harvest April-June, mitaca October-December.
use crate::types::{
    BaseStatistics, ClimateFactors, CoffeeStatistics, HarvestProjection, Metadata, MonthlyRecord,
    Opportunity, PriceRange, Projections2025, QualityGrade, QuarterlyPrices, RegionalShare,
    RiskFactor,
};
use crate::util::round_to;
use chrono::{Local, NaiveDateTime};
use once_cell::sync::Lazy;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::ops::RangeInclusive;
use tracing::debug;

pub const SOURCE: &str = "Federación Nacional de Cafeteros - Aromadata Analytics";
pub const VERSION: &str = "1.0";

pub const MONTHS: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

const MAIN_HARVEST_MONTHS: [usize; 3] = [3, 4, 5];
const MITACA_MONTHS: [usize; 3] = [9, 10, 11];

const MAIN_HARVEST_PRODUCTION: RangeInclusive<u32> = 1400..=1600;
const MITACA_PRODUCTION: RangeInclusive<u32> = 1100..=1300;
const BASELINE_PRODUCTION: RangeInclusive<u32> = 800..=1200;

const EXPORT_SHARE: RangeInclusive<f64> = 0.85..=0.95;
const PRICE_USD_LB: RangeInclusive<f64> = 175.0..=195.0;
const QUALITY_PREMIUM: RangeInclusive<f64> = 5.0..=15.0;

static REGIONS: Lazy<Vec<RegionalShare>> = Lazy::new(|| {
    [
        ("Huila", 18.5, 85),
        ("Nariño", 16.2, 87),
        ("Tolima", 14.8, 83),
        ("Cauca", 12.3, 86),
        ("Antioquia", 10.1, 82),
        ("Valle del Cauca", 8.9, 84),
        ("Caldas", 7.8, 85),
        ("Risaralda", 6.2, 86),
        ("Quindío", 5.2, 87),
    ]
    .into_iter()
    .map(|(name, percentage, quality_score)| RegionalShare {
        name: name.to_string(),
        percentage,
        quality_score,
    })
    .collect()
});

static QUALITY_GRADES: Lazy<Vec<QualityGrade>> = Lazy::new(|| {
    [
        ("Supremo", 45, 12),
        ("Extra", 35, 8),
        ("UGQ (Usual Good Quality)", 15, 0),
        ("Otros", 5, -5),
    ]
    .into_iter()
    .map(|(grade, percentage, price_premium)| QualityGrade {
        grade: grade.to_string(),
        percentage,
        price_premium,
    })
    .collect()
});

static RISK_FACTORS: Lazy<Vec<RiskFactor>> = Lazy::new(|| {
    [
        ("Cambio climático", "Alto", 0.8),
        ("Volatilidad precios internacionales", "Medio", 0.7),
        ("Costos de producción", "Medio", 0.6),
        ("Plagas y enfermedades", "Medio", 0.5),
        ("Disponibilidad mano de obra", "Alto", 0.7),
    ]
    .into_iter()
    .map(|(factor, impact_level, probability)| RiskFactor {
        factor: factor.to_string(),
        impact_level: impact_level.to_string(),
        probability,
    })
    .collect()
});

static OPPORTUNITIES: Lazy<Vec<Opportunity>> = Lazy::new(|| {
    [
        ("Cafés especiales", "Alto", "Creciente"),
        ("Mercados emergentes", "Medio", "Grande"),
        ("Certificaciones sostenibles", "Alto", "Creciente"),
        ("Innovación en procesos", "Medio", "Medio"),
    ]
    .into_iter()
    .map(|(opportunity, growth_potential, market_size)| Opportunity {
        opportunity: opportunity.to_string(),
        growth_potential: growth_potential.to_string(),
        market_size: market_size.to_string(),
    })
    .collect()
});

fn base_statistics() -> BaseStatistics {
    BaseStatistics {
        annual_projection_2025: 15000,
        annual_2024: 13900,
        growth_rate: 0.23,
        arabica_percentage: 95,
        coffee_families: 540000,
        export_value_billions: 4.2,
    }
}

fn climate_factors() -> ClimateFactors {
    ClimateFactors {
        temperature_optimal_range: [18, 24],
        rainfall_optimal_mm: [1200, 1800],
        altitude_optimal_m: [1200, 2000],
        el_nino_impact: -15,
        la_nina_impact: 10,
    }
}

fn price_range(min: u32, max: u32, trend: &str) -> PriceRange {
    PriceRange {
        min,
        max,
        trend: trend.to_string(),
    }
}

fn projections_2025() -> Projections2025 {
    Projections2025 {
        main_harvest: HarvestProjection {
            period: "Abril-Junio".to_string(),
            projected_bags: 9200,
            confidence: 85,
        },
        mitaca_harvest: HarvestProjection {
            period: "Octubre-Diciembre".to_string(),
            projected_bags: 6800,
            confidence: 78,
        },
        price_projections: QuarterlyPrices {
            q1: price_range(185, 195, "alcista"),
            q2: price_range(180, 190, "estable"),
            q3: price_range(175, 185, "bajista"),
            q4: price_range(175, 185, "estable"),
        },
    }
}

/// Production bounds (thousand bags) for a 0-based month index.
pub fn production_range(month_index: usize) -> RangeInclusive<u32> {
    if MAIN_HARVEST_MONTHS.contains(&month_index) {
        MAIN_HARVEST_PRODUCTION
    } else if MITACA_MONTHS.contains(&month_index) {
        MITACA_PRODUCTION
    } else {
        BASELINE_PRODUCTION
    }
}

fn sample_month<R: Rng>(rng: &mut R, index: usize, month: &str) -> MonthlyRecord {
    let production = rng.random_range(production_range(index));
    let exports = (production as f64 * rng.random_range(EXPORT_SHARE)).floor() as u32;
    let price_usd_lb = round_to(rng.random_range(PRICE_USD_LB), 2);
    let quality_premium = round_to(rng.random_range(QUALITY_PREMIUM), 1);
    debug!(month, production, exports, price_usd_lb, quality_premium, "sampled month");

    MonthlyRecord {
        month: month.to_string(),
        month_short: month.chars().take(3).collect(),
        production,
        exports,
        price_usd_lb,
        quality_premium,
    }
}

/// Assemble the full record from an explicit RNG and timestamp.
pub fn generate_with<R: Rng>(rng: &mut R, generated_at: NaiveDateTime) -> CoffeeStatistics {
    let monthly_data_2024 = MONTHS
        .iter()
        .enumerate()
        .map(|(i, month)| sample_month(rng, i, month))
        .collect();

    CoffeeStatistics {
        metadata: Metadata {
            generated_date: generated_at.format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
            source: SOURCE.to_string(),
            version: VERSION.to_string(),
        },
        base_statistics: base_statistics(),
        monthly_data_2024,
        regional_distribution: REGIONS.clone(),
        quality_classification: QUALITY_GRADES.clone(),
        climate_factors: climate_factors(),
        projections_2025: projections_2025(),
        risk_factors: RISK_FACTORS.clone(),
        opportunities: OPPORTUNITIES.clone(),
    }
}

/// Reproducible run: the same seed always yields the same monthly data.
pub fn generate_seeded(seed: u64) -> CoffeeStatistics {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate_with(&mut rng, Local::now().naive_local())
}

/// Default run: OS-seeded RNG, stamped with the current local time.
pub fn generate_statistics() -> CoffeeStatistics {
    let mut rng = ChaCha8Rng::from_os_rng();
    generate_with(&mut rng, Local::now().naive_local())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 11, 5)
            .and_then(|d| d.and_hms_micro_opt(9, 30, 15, 42))
            .unwrap()
    }

    fn seeded(seed: u64) -> CoffeeStatistics {
        generate_with(&mut ChaCha8Rng::seed_from_u64(seed), fixed_time())
    }

    #[test]
    fn monthly_data_has_twelve_months_in_calendar_order() {
        let stats = seeded(7);
        let months: Vec<&str> = stats
            .monthly_data_2024
            .iter()
            .map(|m| m.month.as_str())
            .collect();
        assert_eq!(months, MONTHS.to_vec());
        let shorts: Vec<&str> = stats
            .monthly_data_2024
            .iter()
            .map(|m| m.month_short.as_str())
            .collect();
        assert_eq!(
            shorts,
            vec!["Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic"]
        );
    }

    #[test]
    fn sampled_values_stay_within_bounds() {
        for seed in 0..200 {
            let stats = seeded(seed);
            for (i, m) in stats.monthly_data_2024.iter().enumerate() {
                assert!(production_range(i).contains(&m.production), "{:?}", m);
                assert!(m.exports <= m.production);
                assert!(m.exports as f64 >= (m.production as f64 * 0.85).floor());
                assert!((175.0..=195.0).contains(&m.price_usd_lb), "{:?}", m);
                assert!((5.0..=15.0).contains(&m.quality_premium), "{:?}", m);
                assert_eq!(round_to(m.price_usd_lb, 2), m.price_usd_lb);
                assert_eq!(round_to(m.quality_premium, 1), m.quality_premium);
            }
        }
    }

    #[test]
    fn production_ranges_follow_the_harvest_calendar() {
        for i in [3, 4, 5] {
            assert_eq!(production_range(i), 1400..=1600);
        }
        for i in [9, 10, 11] {
            assert_eq!(production_range(i), 1100..=1300);
        }
        for i in [0, 1, 2, 6, 7, 8] {
            assert_eq!(production_range(i), 800..=1200);
        }
    }

    #[test]
    fn static_sections_do_not_vary_between_runs() {
        let a = seeded(1);
        let b = seeded(2);
        assert_eq!(a.base_statistics, b.base_statistics);
        assert_eq!(a.regional_distribution, b.regional_distribution);
        assert_eq!(a.quality_classification, b.quality_classification);
        assert_eq!(a.climate_factors, b.climate_factors);
        assert_eq!(a.projections_2025, b.projections_2025);
        assert_eq!(a.risk_factors, b.risk_factors);
        assert_eq!(a.opportunities, b.opportunities);
        assert_ne!(a.monthly_data_2024, b.monthly_data_2024);
    }

    #[test]
    fn same_seed_reproduces_monthly_data() {
        assert_eq!(seeded(42).monthly_data_2024, seeded(42).monthly_data_2024);
        assert_eq!(
            generate_seeded(42).monthly_data_2024,
            seeded(42).monthly_data_2024
        );
    }

    #[test]
    fn unseeded_runs_share_static_tables() {
        let a = generate_statistics();
        let b = generate_statistics();
        assert_eq!(a.regional_distribution, b.regional_distribution);
        assert_eq!(a.monthly_data_2024.len(), 12);
    }

    #[test]
    fn static_tables_have_expected_sizes_and_values() {
        let stats = seeded(3);
        assert_eq!(stats.regional_distribution.len(), 9);
        assert_eq!(stats.quality_classification.len(), 4);
        assert_eq!(stats.risk_factors.len(), 5);
        assert_eq!(stats.opportunities.len(), 4);

        let narino = &stats.regional_distribution[1];
        assert_eq!(narino.name, "Nariño");
        assert_eq!(narino.percentage, 16.2);
        assert_eq!(narino.quality_score, 87);

        let otros = &stats.quality_classification[3];
        assert_eq!(otros.grade, "Otros");
        assert_eq!(otros.price_premium, -5);

        assert_eq!(stats.risk_factors[0].factor, "Cambio climático");
        assert_eq!(stats.opportunities[3].opportunity, "Innovación en procesos");
    }

    #[test]
    fn regional_percentages_sum_to_about_one_hundred() {
        let total: f64 = seeded(0)
            .regional_distribution
            .iter()
            .map(|r| r.percentage)
            .sum();
        assert!((total - 100.0).abs() < 0.5, "total {total}");
    }

    #[test]
    fn metadata_and_projections() {
        let stats = seeded(5);
        assert_eq!(stats.metadata.generated_date, "2024-11-05T09:30:15.000042");
        assert_eq!(stats.metadata.source, SOURCE);
        assert_eq!(stats.metadata.version, "1.0");
        assert_eq!(stats.projections_2025.total_projected_bags(), 16000);
        assert_eq!(stats.projections_2025.price_projections.q3.trend, "bajista");
        assert_eq!(stats.climate_factors.el_nino_impact, -15);
    }
}
