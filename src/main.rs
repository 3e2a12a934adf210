use anyhow::{Context, Result};
use clap::Parser;
use personal_stylist::catalog::{load_catalog, Catalog, Category};
use personal_stylist::config::StylistConfig;
use personal_stylist::occasion::{weather_options, OccasionContext, TimeOfDay};
use personal_stylist::recommend::recommend_outfit;
use personal_stylist::style::{generate_artist_vector, known_genres, ArtistStyleVector};
use personal_stylist::user::{
    AgeGroup, FilePreferencesStore, GenderIdentity, PreferencesStore, Sliders, UserPreferences,
};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
struct CliArgs {
    /// Optional TOML config file.
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Overrides the preference blob location from the config.
    #[clap(long)]
    pub prefs: Option<PathBuf>,

    /// Discards stored preferences and runs the setup again.
    #[clap(long)]
    pub reset: bool,
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .with_context(|| "Failed to read line")?;
    Ok(input.trim().to_owned())
}

fn prompt_or(label: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{label} [{default}]"))?;
    if input.is_empty() {
        Ok(default.to_owned())
    } else {
        Ok(input)
    }
}

fn prompt_choice(label: &str, options: &[&str]) -> Result<usize> {
    loop {
        for (i, option) in options.iter().enumerate() {
            println!("  {}. {option}", i + 1);
        }
        let input = prompt(label)?;
        match input.parse::<usize>() {
            Ok(n) if n >= 1 && n <= options.len() => return Ok(n - 1),
            _ => println!("Please enter a number between 1 and {}.", options.len()),
        }
    }
}

fn prompt_slider(left: &str, right: &str) -> Result<u8> {
    loop {
        let input = prompt_or(&format!("{left} (0) .. {right} (100)"), "50")?;
        match input.parse::<u8>() {
            Ok(value) if value <= 100 => return Ok(value),
            _ => println!("Please enter a value between 0 and 100."),
        }
    }
}

fn setup_preferences(store: &dyn PreferencesStore) -> Result<UserPreferences> {
    println!("\nDefine your aesthetic:\n");

    let sliders = Sliders {
        minimal_loud: prompt_slider("Minimal", "Loud")?,
        fitted_oversized: prompt_slider("Fitted", "Oversized")?,
        classic_trendy: prompt_slider("Classic", "Trendy")?,
        sporty_polished: prompt_slider("Sporty", "Polished")?,
        safe_experimental: prompt_slider("Safe", "Experimental")?,
    };

    let age = match prompt_choice("Age group", &["Gen Z", "Millennial", "Gen X", "Boomer"])? {
        0 => AgeGroup::GenZ,
        1 => AgeGroup::Millennial,
        2 => AgeGroup::GenX,
        _ => AgeGroup::Boomer,
    };

    let gender = match prompt_choice(
        "Style profile",
        &["Feminine", "Masculine", "Non-binary/Unisex"],
    )? {
        0 => GenderIdentity::Feminine,
        1 => GenderIdentity::Masculine,
        _ => GenderIdentity::NonBinary,
    };

    let preferences = UserPreferences {
        sliders,
        age,
        gender,
    };
    store.save(&preferences)?;
    println!("Preferences saved.\n");
    Ok(preferences)
}

fn read_occasion() -> Result<OccasionContext> {
    let occasion = prompt_or("Occasion (e.g. Concert, Dinner)", "Concert")?;
    let time = match prompt_choice("Time of day", &["Day", "Night"])? {
        0 => TimeOfDay::Day,
        _ => TimeOfDay::Night,
    };
    let options = weather_options(time);
    let weather = options[prompt_choice("Weather", &options)?].to_owned();
    let artist = prompt("Artist/Event theme (optional)")?;
    let location = prompt_or("Location", "New York")?;

    Ok(OccasionContext {
        occasion,
        weather,
        artist,
        location,
        time,
    })
}

fn print_artist_summary(artist: &ArtistStyleVector) {
    let v = &artist.vector;
    println!(
        "\nStyle vector: minimal_loud {:+.2}, fitted_oversized {:+.2}, \
         classic_experimental {:+.2}, soft_edgy {:+.2}, casual_glam {:+.2}",
        v.minimal_loud, v.fitted_oversized, v.classic_experimental, v.soft_edgy, v.casual_glam
    );
    if !artist.dominant_signals.is_empty() {
        println!("Dominant signals: {}", artist.dominant_signals.join(", "));
    }
}

fn build_outfit(
    catalog: &Catalog,
    preferences: &UserPreferences,
    occasion: &OccasionContext,
    artist: &ArtistStyleVector,
) -> Result<()> {
    let outfit = recommend_outfit(catalog, preferences, occasion, artist);

    let title = if occasion.artist.is_empty() {
        format!("Custom {}", occasion.occasion)
    } else {
        format!("{} {}", occasion.artist, occasion.occasion)
    };
    println!("\n=== {title} ===");
    print_artist_summary(artist);
    println!(
        "\nOptimized for {} conditions in {}.\n",
        occasion.weather, occasion.location
    );

    let mut selections: Vec<(Category, String)> = vec![];
    for (step, category) in Category::ALL.iter().enumerate() {
        let shortlist = outfit.shortlist(*category);
        if shortlist.is_empty() {
            println!(
                "No {} matches the current filters, skipping.",
                category.as_str()
            );
            continue;
        }
        println!(
            "Builder step {} of {}: {}",
            step + 1,
            Category::ALL.len(),
            category.as_str()
        );
        let names: Vec<&str> = shortlist.iter().map(|name| name.as_str()).collect();
        let picked = prompt_choice("Your pick", &names)?;
        selections.push((*category, shortlist[picked].clone()));
        println!();
    }

    println!("=== Final Ensemble ===");
    for (category, name) in &selections {
        println!("{:>9}: {name}", category.as_str());
    }
    println!();
    Ok(())
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    let config = match &cli_args.config {
        Some(path) => StylistConfig::load(path)?,
        None => StylistConfig::default(),
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(config.log_filter.parse()?)
                .from_env_lossy(),
        )
        .init();

    let catalog = load_catalog()?;

    let prefs_path = cli_args
        .prefs
        .clone()
        .unwrap_or_else(|| config.preferences_path.clone());
    let store = FilePreferencesStore::new(prefs_path);

    if cli_args.reset {
        store.clear()?;
    }

    let preferences = match store.load()? {
        Some(preferences) => preferences,
        None => setup_preferences(&store)?,
    };

    println!(
        "Personal Stylist ready ({} garments). Known genres: {}.",
        catalog.garments_count(),
        known_genres().collect::<Vec<_>>().join(", ")
    );

    loop {
        let occasion = read_occasion()?;
        let genre_hint = prompt("Genre hint (optional)")?;
        let genre_hint = if genre_hint.is_empty() {
            None
        } else {
            Some(genre_hint.as_str())
        };
        let artist = generate_artist_vector(&occasion.artist, genre_hint);

        build_outfit(catalog, &preferences, &occasion, &artist)?;

        let again = prompt_or("Another occasion? (y/n)", "y")?;
        if !again.eq_ignore_ascii_case("y") {
            return Ok(());
        }
    }
}
