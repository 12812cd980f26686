//! Sample a model into a force/potential table.
//!
//! Builds an extended Buckingham model with fixed coefficients, then a
//! SHIK model from the published reference data, and prints the sampled
//! curves the way a table writer would consume them.
//!
//! Run with: `cargo run --example sample_table`

use anyhow::Result;
use pairtab::data::ShikData;
use pairtab::twobody::{
    BuckinghamCoefficients, BuckinghamConfig, BuckinghamExtended, PairPotential, ShikConfig,
    ShikIonic, TwobodyPotential,
};
use pairtab::{support, Cutoff, Error, Info, PairKey};

fn print_table(model: &TwobodyPotential) -> Result<()> {
    let dr = model.cutoff() / model.sample_count() as f64;
    println!("# table: {}", model.name());
    for pair in model.pairs() {
        println!("# pair: {}", pair);
        for i in 1..=model.sample_count() {
            let r = i as f64 * dr;
            println!(
                "{:10.5} {:18.10e} {:18.10e}",
                r,
                model.potential(&pair, r)?,
                model.force(&pair, r)?
            );
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let config = BuckinghamConfig {
        table_name: "BUCK_SiO2".to_string(),
        plot: false,
        cutoff: 10.0,
        sample_count: 25,
        pairs: vec!["Si-O".to_string(), "O-O".to_string()],
    };
    let mut source = |pair: &PairKey| -> Result<BuckinghamCoefficients, Error> {
        Ok(match pair.as_str() {
            "Si-O" => BuckinghamCoefficients::new(18003.7572, 0.2052, 133.5381, 0.0),
            _ => BuckinghamCoefficients::new(1388.7730, 0.3623, 175.0000, 0.0),
        })
    };
    let buckingham = BuckinghamExtended::new(config, &mut source)?;
    if let Some(citation) = buckingham.citation() {
        println!("# model: {}", citation);
    }
    print_table(&TwobodyPotential::BuckinghamExtended(buckingham))?;

    println!("{}", support::shik_support(&ShikData::published()));

    let config = ShikConfig {
        table_name: "SHIK_NS2".to_string(),
        plot: false,
        cutoff: 10.0,
        wolf_cutoff: 10.0,
        buck_cutoff: 6.0,
        gamma: 0.2,
        sample_count: 25,
        species: vec!["Na:2".to_string(), "Si:2".to_string(), "O:5".to_string()],
    };
    let shik = ShikIonic::new(config, &ShikData::published())?;
    print_table(&TwobodyPotential::ShikIonic(shik))?;

    Ok(())
}
