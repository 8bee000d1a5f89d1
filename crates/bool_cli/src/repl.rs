//! Interactive REPL: rustyline line editing, expression evaluation with a
//! numbered step trace, and colon commands for canonical forms and
//! equivalence checks.

use crate::json_types::{ErrorJsonOutput, SimplifyJsonOutput, VerifyJsonOutput};
use bool_ast::{format_expr, OutputFormat};
use bool_engine::{to_product_of_sums, to_sum_of_products, verify, Simplifier};
use bool_parser::parse;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use serde::Serialize;
use tracing::debug;

const HELP: &str = "\
Enter a Boolean expression to simplify it step by step.
Operators: ! NOT, * AND, + OR, ^ XOR, <-> XNOR, @ NAND, # NOR
Variables are single letters A-Z; constants are 0 and 1.
LaTeX input (\\lnot, \\land, \\lor, \\overline{..}, ...) is detected
automatically.

Commands:
  :sop EXPR        canonical sum of products (minterms)
  :pos EXPR        canonical product of sums (maxterms)
  :verify A , B    check equivalence of two expressions
  :latex on|off    also print results in LaTeX notation
  :steps on|off    show or hide the step trace
  :json            toggle JSON output
  :help            this text
  :quit            exit";

pub struct Repl {
    simplifier: Simplifier,
    show_steps: bool,
    latex: bool,
    json: bool,
}

impl Default for Repl {
    fn default() -> Self {
        Self::new()
    }
}

impl Repl {
    pub fn new() -> Self {
        Self {
            simplifier: Simplifier::with_default_rules(),
            show_steps: true,
            latex: false,
            json: false,
        }
    }

    pub fn run(&mut self) -> rustyline::Result<()> {
        let mut rl = DefaultEditor::new()?;
        println!("Boolean algebra simplifier");
        println!("Enter an expression (e.g. 'A + !A'), or :help for commands.");

        loop {
            match rl.readline("bool> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    rl.add_history_entry(line)?;

                    if let Some(command) = line.strip_prefix(':') {
                        if !self.handle_command(command) {
                            break;
                        }
                    } else {
                        self.evaluate(line);
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }
        Ok(())
    }

    /// Returns false when the REPL should exit.
    fn handle_command(&mut self, command: &str) -> bool {
        let (name, rest) = match command.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (command, ""),
        };
        match name {
            "quit" | "exit" | "q" => {
                println!("Goodbye!");
                return false;
            }
            "help" | "h" => println!("{}", HELP),
            "latex" => match rest {
                "on" => self.latex = true,
                "off" => self.latex = false,
                _ => println!("usage: :latex on|off"),
            },
            "steps" => match rest {
                "on" => self.show_steps = true,
                "off" => self.show_steps = false,
                _ => println!("usage: :steps on|off"),
            },
            "json" => {
                self.json = !self.json;
                println!("json output {}", if self.json { "on" } else { "off" });
            }
            "sop" => self.canonical(rest, true),
            "pos" => self.canonical(rest, false),
            "verify" => self.verify_pair(rest),
            _ => println!("unknown command :{} (try :help)", name),
        }
        true
    }

    /// Parse, simplify, and print the trace and result.
    pub fn evaluate(&self, input: &str) {
        let expr = match parse(input) {
            Ok(expr) => expr,
            Err(err) => return self.report_error(input, &err.to_string()),
        };
        debug!(%expr, "parsed");
        let result = self.simplifier.simplify(&expr);

        if self.json {
            print_json(&SimplifyJsonOutput::from_result(input, &result));
            return;
        }

        if self.show_steps {
            if result.steps.is_empty() {
                println!("No simplification steps needed.");
            } else {
                println!("Steps:");
                for (i, step) in result.steps.iter().enumerate() {
                    println!("{}. {}  [{}]", i + 1, step.description, step.rule_name);
                    println!("   -> {}", step.after);
                }
            }
        }
        println!("Result: {}", result.final_expression);
        if self.latex {
            println!(
                "LaTeX:  {}",
                format_expr(&result.final_expression, OutputFormat::Latex)
            );
        }
    }

    fn canonical(&self, input: &str, sum_of_products: bool) {
        if input.is_empty() {
            println!("usage: :{} EXPR", if sum_of_products { "sop" } else { "pos" });
            return;
        }
        let expr = match parse(input) {
            Ok(expr) => expr,
            Err(err) => return self.report_error(input, &err.to_string()),
        };
        let built = if sum_of_products {
            to_sum_of_products(&expr)
        } else {
            to_product_of_sums(&expr)
        };
        match built {
            Ok(canonical) => {
                println!("{}", canonical);
                if self.latex {
                    println!("LaTeX:  {}", format_expr(&canonical, OutputFormat::Latex));
                }
            }
            Err(err) => self.report_error(input, &err.to_string()),
        }
    }

    fn verify_pair(&self, input: &str) {
        let Some((lhs, rhs)) = input.split_once(',') else {
            println!("usage: :verify EXPR , EXPR");
            return;
        };
        let a = match parse(lhs.trim()) {
            Ok(expr) => expr,
            Err(err) => return self.report_error(lhs.trim(), &err.to_string()),
        };
        let b = match parse(rhs.trim()) {
            Ok(expr) => expr,
            Err(err) => return self.report_error(rhs.trim(), &err.to_string()),
        };
        let result = verify(&a, &b);

        if self.json {
            print_json(&VerifyJsonOutput::from_result(&result));
            return;
        }

        println!(
            "Equivalent: {}",
            if result.is_equivalent { "yes" } else { "no" }
        );
        println!("Details: {}", result.details);
        if let Some(table) = &result.truth_table {
            // only print small tables in full
            if table.len() <= 16 {
                if let Some(first) = table.first() {
                    let header: Vec<&str> =
                        first.assignment.iter().map(|(name, _)| name.as_str()).collect();
                    println!("{} | left right", header.join(" "));
                    for row in table {
                        let values: Vec<String> = row
                            .assignment
                            .iter()
                            .map(|(_, value)| (*value as u8).to_string())
                            .collect();
                        println!(
                            "{} | {}    {}",
                            values.join(" "),
                            row.left as u8,
                            row.right as u8
                        );
                    }
                }
            }
        }
    }

    fn report_error(&self, input: &str, message: &str) {
        if self.json {
            print_json(&ErrorJsonOutput::with_input(message, input));
        } else {
            println!("Error: {}", message);
        }
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(err) => println!("Error: {}", err),
    }
}
