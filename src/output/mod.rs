pub mod human;
pub mod json;

use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Human,
    Json,
}

impl OutputFormat {
    pub fn from_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Trait for command outputs that can be rendered in both human and JSON formats.
pub trait CommandOutput: Serialize {
    fn human_display(&self) -> String;
}

/// Print a command output in the requested format. JSON output is wrapped
/// in the standard envelope.
pub fn print_output<T: CommandOutput>(output: &T, format: OutputFormat) {
    match format {
        OutputFormat::Human => println!("{}", output.human_display()),
        OutputFormat::Json => {
            let envelope = json::JsonEnvelope::success(output);
            println!(
                "{}",
                serde_json::to_string_pretty(&envelope).expect("failed to serialize output")
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        count: u32,
    }

    impl CommandOutput for Sample {
        fn human_display(&self) -> String {
            format!("{} chapters", self.count)
        }
    }

    #[test]
    fn test_human_display() {
        let s = Sample { count: 3 };
        assert_eq!(s.human_display(), "3 chapters");
    }

    #[test]
    fn test_format_from_flag() {
        assert!(matches!(OutputFormat::from_flag(true), OutputFormat::Json));
        assert!(matches!(OutputFormat::from_flag(false), OutputFormat::Human));
    }
}
