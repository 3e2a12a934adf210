use clap::Parser;
use personal_stylist::catalog::{Catalog, Category};

/// Checks the embedded garment catalog and prints what it holds.
#[derive(Parser, Debug)]
struct CliArgs {
    /// Only report problems, skip the per-category listing.
    #[clap(long)]
    pub problems_only: bool,
}

fn main() {
    let cli_args = CliArgs::parse();
    let catalog = Catalog::get();
    let problems = catalog.check();

    if !problems.is_empty() {
        println!("Found {} problems:", problems.len());
        for problem in problems.iter() {
            println!("- {:?}", problem);
        }
        println!();
    }

    match (
        problems.iter().any(|p| p.is_fatal()),
        problems.is_empty(),
    ) {
        (false, true) => println!("Catalog checked, no issues found."),
        (false, false) => println!("Catalog is usable, but check the issues above."),
        (true, _) => {
            println!("Check the problems above, the catalog cannot be used.");
            std::process::exit(1);
        }
    }

    if cli_args.problems_only {
        return;
    }

    println!("\nCatalog has {} garments:", catalog.garments_count());
    for category in Category::ALL {
        let garments = catalog.garments(category);
        println!("\n{} ({}):", category.as_str(), garments.len());
        for garment in garments {
            println!(
                "- {} [{:?}] {:?}",
                garment.name, garment.gender_tag, garment.weather_tags
            );
        }
    }
}
