//! Two-pass script compiler.
//!
//! Pass 1 walks the line list once to register every `[Header]` in
//! first-seen order and, until the store's seeded latch is set, to bind
//! `name=value` initial assignments. Pass 2 walks the same lines again
//! and assembles section bodies, evaluating conditional headers and
//! choice guards against the store snapshot as it goes. Conditions are
//! therefore decided once, at compile time: the graph a session plays
//! back is already specialized to the variables it was compiled with.

use regex::Regex;

use crate::condition;
use crate::graph::{Choice, Section, SectionGraph, Target};
use crate::value::{Value, VariableStore};

/// Compiles script text against the given store. The first compilation
/// against a store seeds its initial variables and sets the seeded
/// latch; any later compilation (of this or any other script) leaves
/// the variables untouched.
pub fn compile(source: &str, store: &mut VariableStore) -> SectionGraph {
    let lines: Vec<&str> = source
        .split(['\r', '\n'])
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let mut compiler = Compiler {
        store,
        graph: SectionGraph::new(),
        // if [cond] [Target] else [Redirect] -- target brackets optional
        cond_header: Regex::new(
            r"^if\s*\[(?<cond>[^\]]*)\]\s*(?<target>\[[^\]]*\]|[^\s\[]+)\s*else\s*\[(?<redirect>[^\]]*)\]$",
        )
        .expect("conditional header pattern"),
    };
    compiler.headers_and_variables(&lines);
    compiler.bodies(&lines);

    log::debug!(
        "compiled script: {} lines, {} sections",
        lines.len(),
        compiler.graph.len()
    );
    compiler.graph
}

struct Compiler<'a> {
    store: &'a mut VariableStore,
    graph: SectionGraph,
    cond_header: Regex,
}

impl Compiler<'_> {
    /// Pass 1: header discovery and initial variable binding.
    fn headers_and_variables(&mut self, lines: &[&str]) {
        for line in lines {
            if let Some(key) = header_key(line) {
                self.graph.register(key);
                continue;
            }
            if self.store.is_seeded() || line.starts_with("if") {
                continue;
            }
            if let Some((name, literal)) = line.split_once('=') {
                let name = name.trim().to_string();
                let literal = literal.trim();
                let value = match literal.to_ascii_lowercase().as_str() {
                    "true" => Value::Bool(true),
                    "false" => Value::Bool(false),
                    // Kept textual; numeric coercion is deferred to consumers.
                    _ => Value::Str(literal.to_string()),
                };
                self.store.define(name, value);
            }
        }
        self.store.mark_seeded();
    }

    /// Pass 2: body assembly under a current-section cursor.
    fn bodies(&mut self, lines: &[&str]) {
        let mut cursor: Option<String> = self.graph.first().map(str::to_string);

        for line in lines {
            // Assignment lines were consumed in pass 1.
            if line.contains('=') && !line.starts_with("if") {
                continue;
            }

            if let Some(key) = header_key(line) {
                cursor = Some(key.to_string());
                continue;
            }

            if line.starts_with("if") && line.contains("else") {
                if let Some(key) = self.conditional_header(line) {
                    cursor = Some(key);
                }
                continue;
            }

            let Some(current) = cursor.as_deref() else {
                continue;
            };

            if line.contains('[') && line.contains(']') {
                let Some(rest) = self.strip_guard(line) else {
                    continue;
                };
                if let Some(choice) = parse_choice(rest) {
                    self.section_mut(current).choices.push(choice);
                    continue;
                }
                // A guard with no target brackets left; fall through
                // and keep the remainder as dialogue.
                self.section_mut(current).lines.push(rest.to_string());
                continue;
            }

            self.section_mut(current).lines.push(line.to_string());
        }
    }

    /// `if [cond] [Target] else [Redirect]`: the cursor moves to
    /// `Target` on both branches; only the false branch attaches the
    /// redirect. Returns the new cursor key.
    fn conditional_header(&mut self, line: &str) -> Option<String> {
        let Some(caps) = self.cond_header.captures(line) else {
            log::warn!("unrecognized conditional header: '{}'", line);
            return None;
        };
        let cond = caps["cond"].trim().to_string();
        let target = caps["target"]
            .trim()
            .trim_start_matches('[')
            .trim_end_matches(']')
            .trim()
            .to_string();
        let redirect = caps["redirect"].trim().to_string();

        let truthy = condition::evaluate(&cond, self.store);
        let section = self.section_mut(&target);
        if truthy {
            section.redirect = None;
        } else {
            section.redirect = Some(redirect);
        }
        Some(target)
    }

    /// Strips an optional `if [cond]` choice guard. Returns the line
    /// remainder, or `None` when the guard failed and the whole line is
    /// dropped. A bare single-token condition (`if count<3 ...`) is
    /// accepted alongside the bracketed form.
    fn strip_guard<'l>(&self, line: &'l str) -> Option<&'l str> {
        let Some(after_if) = line.strip_prefix("if") else {
            return Some(line);
        };
        if !after_if.starts_with([' ', '\t', '[']) {
            // Not a guard, just a line that happens to start with "if".
            return Some(line);
        }
        let rest = after_if.trim_start();

        let (cond, remainder) = if let Some(bracketed) = rest.strip_prefix('[') {
            match bracketed.split_once(']') {
                Some((cond, rem)) => (cond, rem),
                None => (bracketed, ""),
            }
        } else {
            rest.split_once([' ', '\t']).unwrap_or((rest, ""))
        };

        if condition::evaluate(cond.trim(), &*self.store) {
            Some(remainder.trim_start())
        } else {
            None
        }
    }

    fn section_mut(&mut self, key: &str) -> &mut Section {
        self.graph.register(key);
        self.graph.get_mut(key).expect("section registered above")
    }
}

fn header_key(line: &str) -> Option<&str> {
    if line.len() >= 2 && line.starts_with('[') && line.ends_with(']') {
        Some(line[1..line.len() - 1].trim())
    } else {
        None
    }
}

/// Splits a choice line at its last `[`: the prefix is the label, the
/// bracket content the target token.
fn parse_choice(line: &str) -> Option<Choice> {
    let idx = line.rfind('[')?;
    let text = line[..idx].trim().to_string();
    let token = line[idx + 1..].trim_end().trim_end_matches(']').trim();

    let target = match token {
        "EXIT" => Target::Exit,
        "INVOKE" => Target::Invoke,
        key => Target::Section(key.to_string()),
    };
    Some(Choice { text, target })
}
