use std::io::{self, BufRead};

use relayout::{config, convert_selected_text, convert_smart, util::tracing::init_tracing};

/// Command line driver: converts text given as arguments (or piped on
/// stdin, one line at a time). `--smart` treats the input as the line
/// before the cursor and applies the configured smart-conversion strategy
/// instead of whole-selection conversion. Input that yields no conversion
/// is echoed unchanged; that is the silent do-nothing fall-through, not an
/// error.
fn main() -> io::Result<()> {
    init_tracing();

    let cfg = config::load()?;
    let enabled = cfg.enabled_layout_ids();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let smart = args.first().is_some_and(|a| a == "--smart");
    if smart {
        args.remove(0);
    }

    if args.is_empty() {
        for line in io::stdin().lock().lines() {
            println!("{}", convert_line(&line?, &enabled, &cfg, smart));
        }
    } else {
        println!("{}", convert_line(&args.join(" "), &enabled, &cfg, smart));
    }

    Ok(())
}

fn convert_line(text: &str, enabled: &[&str], cfg: &config::Config, smart: bool) -> String {
    let outcome = if smart {
        convert_smart(text, enabled, cfg.smart_conversion_mode())
    } else {
        convert_selected_text(text, enabled)
    };

    match outcome {
        Some(outcome) => {
            tracing::trace!(target_layout = %outcome.target_layout_id, "converted");
            outcome.text
        }
        None => text.to_string(),
    }
}
