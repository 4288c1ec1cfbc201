//! Interactive calculator session.
//!
//! Mirrors the journal's live form: each `set` updates one field and the
//! result is recomputed immediately. The result block is hidden while the
//! inputs are not computable.

use std::io::{BufRead, Write};

use riskbook::format::DisplayStyle;
use riskbook::inputs::parse_field;
use riskbook::{Field, PositionRiskCalculator, RiskInputs};

use crate::config::Config;
use crate::error::Result;

const PROMPT: &str = "risk> ";

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Print the text and read the next line.
    Continue(String),
    Quit,
}

/// Form state for one interactive session.
#[derive(Debug, Clone)]
pub struct Session {
    inputs: RiskInputs,
    defaults: RiskInputs,
    calc: PositionRiskCalculator,
    style: DisplayStyle,
}

impl Session {
    /// Start a session with capital and risk prefilled from config.
    pub fn new(config: &Config) -> Self {
        let defaults = RiskInputs::new(
            config.defaults.capital.unwrap_or(0.0),
            config.defaults.risk_pct.unwrap_or(0.0),
            0.0,
            0.0,
            None,
        );
        Self {
            inputs: defaults,
            defaults,
            calc: config.calculator(),
            style: config.style(),
        }
    }

    pub fn inputs(&self) -> &RiskInputs {
        &self.inputs
    }

    /// Run one command line.
    pub fn execute(&mut self, line: &str) -> Step {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let cmd = parts.first().map(|s| s.to_lowercase());

        let text = match cmd.as_deref() {
            Some("help" | "h" | "?") => HELP.trim_matches('\n').to_string(),
            Some("quit" | "exit" | "q") => return Step::Quit,
            Some("show" | "s") => self.show_inputs(),
            Some("calc" | "c") => self.render(),
            Some("clear") => self.clear(&parts[1..]),
            Some("set") => self.set(&parts[1..]),
            // `entry 100` as a shorthand for `set entry 100`
            Some(name) if Field::from_name(name).is_some() => self.set(&parts),
            Some(cmd) => format!("Unknown command: '{cmd}'. Type 'help' for commands."),
            None => String::new(),
        };
        Step::Continue(text)
    }

    /// Read commands until EOF or `quit`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        writeln!(out, "Position size calculator. Type 'help' for commands, 'quit' to exit.")?;
        write!(out, "{PROMPT}")?;
        out.flush()?;

        for line in input.lines() {
            match self.execute(line?.trim()) {
                Step::Quit => break,
                Step::Continue(text) => {
                    if !text.is_empty() {
                        writeln!(out, "{text}")?;
                    }
                }
            }
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }
        writeln!(out)?;
        Ok(())
    }

    fn set(&mut self, args: &[&str]) -> String {
        let [name, value] = args else {
            return "Usage: set <capital|risk|entry|sl|target> <value>".to_string();
        };
        let Some(field) = Field::from_name(name) else {
            return format!("Unknown field: '{name}'");
        };
        self.inputs.set(field, parse_field(value));
        self.render()
    }

    fn clear(&mut self, args: &[&str]) -> String {
        match args {
            [] => {
                self.inputs = self.defaults;
                "Inputs reset.".to_string()
            }
            [name] => match Field::from_name(name) {
                Some(field) => {
                    self.inputs.set(field, 0.0);
                    self.render()
                }
                None => format!("Unknown field: '{name}'"),
            },
            _ => "Usage: clear [field]".to_string(),
        }
    }

    fn show_inputs(&self) -> String {
        Field::ALL
            .iter()
            .map(|&field| {
                let value = self.inputs.get(field);
                if value == 0.0 {
                    format!("  {:<10} -", field.as_str())
                } else {
                    format!("  {:<10} {}", field.as_str(), value)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The result block, or a note on which required fields are still empty.
    fn render(&self) -> String {
        match self.calc.compute(&self.inputs).result() {
            Some(result) => self.style.view(result).to_string(),
            None => {
                let missing: Vec<&str> = Field::ALL[..4]
                    .iter()
                    .filter(|f| self.inputs.get(**f) == 0.0)
                    .map(|f| f.as_str())
                    .collect();
                format!("  (waiting for {})", missing.join(", "))
            }
        }
    }
}

const HELP: &str = r#"
Commands:
  set <field> <value>     Set a field and recalculate
  <field> <value>         Same as set
  clear [field]           Reset one field, or all fields to defaults
  show                    Show current inputs
  calc                    Show the current result
  help                    Show this help
  quit                    Exit

Fields: capital, risk (percent), entry, sl (stop-loss), target

Examples:
  capital 100000
  risk 1
  entry 2450
  sl 2400
  target 2600
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        let config =
            Config::from_toml("[defaults]\ncapital = 100000.0\nrisk_pct = 1.0\n").unwrap();
        Session::new(&config)
    }

    fn text(step: Step) -> String {
        match step {
            Step::Continue(text) => text,
            Step::Quit => panic!("unexpected quit"),
        }
    }

    #[test]
    fn result_hidden_until_computable() {
        let mut s = session();
        assert_eq!(text(s.execute("entry 100")), "  (waiting for stop_loss)");
        let shown = text(s.execute("set sl 95"));
        assert!(shown.contains("Position size   : 200"));
    }

    #[test]
    fn target_updates_reward() {
        let mut s = session();
        s.execute("entry 100");
        s.execute("sl 95");
        let shown = text(s.execute("target 110"));
        assert!(shown.contains("1 : 2 (favorable)"));
        assert!(shown.contains("Target profit   : ₹2,000"));

        let cleared = text(s.execute("clear target"));
        assert!(cleared.contains("Risk : reward   : N/A"));
    }

    #[test]
    fn garbage_value_hides_result() {
        let mut s = session();
        s.execute("entry 100");
        s.execute("sl 95");
        assert_eq!(text(s.execute("sl abc")), "  (waiting for stop_loss)");
    }

    #[test]
    fn clear_all_restores_defaults() {
        let mut s = session();
        s.execute("capital 5000");
        s.execute("entry 100");
        assert_eq!(text(s.execute("clear")), "Inputs reset.");
        assert_eq!(s.inputs().capital, 100_000.0);
        assert_eq!(s.inputs().entry_price, 0.0);
    }

    #[test]
    fn show_lists_fields() {
        let mut s = session();
        s.execute("entry 100");
        let shown = text(s.execute("show"));
        assert!(shown.contains("capital    100000"));
        assert!(shown.contains("entry      100"));
        assert!(shown.contains("stop_loss  -"));
    }

    #[test]
    fn usage_and_unknown_commands() {
        let mut s = session();
        assert!(text(s.execute("set entry")).starts_with("Usage"));
        assert_eq!(text(s.execute("set qty 5")), "Unknown field: 'qty'");
        assert!(text(s.execute("buy 5")).starts_with("Unknown command"));
        assert_eq!(text(s.execute("")), "");
        assert_eq!(s.execute("quit"), Step::Quit);
    }

    #[test]
    fn run_loop_reads_until_quit() {
        let mut s = session();
        let input = b"entry 100\nsl 95\nquit\nentry 1\n";
        let mut out = Vec::new();
        s.run(&input[..], &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Position size   : 200"));
        assert_eq!(s.inputs().entry_price, 100.0);
    }
}
