//! Basic usage example for the comparison API

use dictee_api::{compare_text, quick_score, Comparator, Config, DiffKind, Input};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let reference = "So today we are going to talk about the weather in London.";

    // Method 1: Simplest usage with convenience function
    println!("=== Method 1: Convenience Function ===");
    let output = compare_text("so today we going to talk about the wether in london", reference);

    for entry in &output.diff {
        let marker = match entry.kind {
            DiffKind::Correct => " ",
            DiffKind::Mistake => "~",
            DiffKind::Missing => "-",
            DiffKind::Wrong => "+",
        };
        println!("  {marker} {}", entry.text);
    }
    println!("Accuracy: {:.1}%\n", output.accuracy * 100.0);

    // Method 2: Using configuration presets
    println!("=== Method 2: Configuration Presets ===");
    let comparator = Comparator::with_config(Config::strict())?;
    let output = comparator.compare(
        Input::from_text("so today we going to talk about the wether in london"),
        Input::from_text(reference),
    )?;
    println!("Strict mode: {:?}\n", output.stats);

    // Method 3: Custom configuration with timestamps
    println!("=== Method 3: Custom Configuration ===");
    let config = Config::builder()
        .mistake_threshold(0.8)
        .window_size(10)
        .max_search(100)
        .build()?;
    let comparator = Comparator::with_config(config)?;
    let caption_times = [0.0, 0.3, 0.5, 0.7, 0.9, 1.1, 1.3, 1.6, 1.8, 2.2, 2.5];
    let output = comparator.compare_with_timestamps(
        Input::from_text("so today we are going to talk about weather in London"),
        Input::from_text(reference),
        None,
        Some(&caption_times),
    )?;
    for entry in output.diff.iter().filter(|e| e.kind == DiffKind::Missing) {
        println!("  missed {:?} at {:.1}s", entry.text, entry.timestamp);
    }

    // Method 4: Quick whole-text score
    println!("\n=== Method 4: Quick Score ===");
    println!(
        "Quick score: {:.3}",
        quick_score("so today we are going to talk about the weather", reference)
    );

    Ok(())
}
