//! Placeholder tokens and their substitution into template lines.
//!
//! Substitution is flat and literal: a line is scanned once from left to
//! right, every token occurrence is replaced by its resolved value, and the
//! replaced text is never scanned again. There is no escape syntax.

use crate::context::RunContext;
use crate::descriptor::TypeDescriptor;

/// One of the fixed markers recognized in a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// `$type$` - primitive keyword
    Type,
    /// `$Type$` - capitalized primitive keyword
    CapitalizedType,
    /// `$LongType$` - wrapper class name
    LongType,
    /// `$Tool$` - name of the generating tool
    Tool,
    /// `$Date$` - generation timestamp
    Date,
}

impl Placeholder {
    pub const ALL: [Placeholder; 5] = [
        Placeholder::Type,
        Placeholder::CapitalizedType,
        Placeholder::LongType,
        Placeholder::Tool,
        Placeholder::Date,
    ];

    /// Literal text of the marker as it appears in a template.
    pub fn marker(self) -> &'static str {
        match self {
            Placeholder::Type => "$type$",
            Placeholder::CapitalizedType => "$Type$",
            Placeholder::LongType => "$LongType$",
            Placeholder::Tool => "$Tool$",
            Placeholder::Date => "$Date$",
        }
    }

    /// The placeholder whose marker starts `text`, if any.
    fn at_start_of(text: &str) -> Option<Placeholder> {
        Self::ALL.into_iter().find(|p| text.starts_with(p.marker()))
    }
}

/// Resolved placeholder values for one descriptor within one run.
#[derive(Debug, Clone)]
pub struct Substitutions {
    short_name: String,
    capitalized: String,
    long_name: String,
    tool: String,
    date: String,
}

impl Substitutions {
    pub fn new(descriptor: &TypeDescriptor, ctx: &RunContext) -> Self {
        Self {
            short_name: descriptor.short_name.to_string(),
            capitalized: descriptor.capitalized(),
            long_name: descriptor.long_name.to_string(),
            tool: ctx.tool_name.clone(),
            date: ctx.timestamp.clone(),
        }
    }

    pub fn value(&self, placeholder: Placeholder) -> &str {
        match placeholder {
            Placeholder::Type => &self.short_name,
            Placeholder::CapitalizedType => &self.capitalized,
            Placeholder::LongType => &self.long_name,
            Placeholder::Tool => &self.tool,
            Placeholder::Date => &self.date,
        }
    }

    /// Replace every marker in `line`. Returns the new line and the number
    /// of markers replaced.
    pub fn apply(&self, line: &str) -> (String, usize) {
        let mut out = String::with_capacity(line.len());
        let mut count = 0;
        let mut rest = line;

        while let Some(pos) = rest.find('$') {
            out.push_str(&rest[..pos]);
            let tail = &rest[pos..];
            match Placeholder::at_start_of(tail) {
                Some(placeholder) => {
                    out.push_str(self.value(placeholder));
                    rest = &tail[placeholder.marker().len()..];
                    count += 1;
                }
                None => {
                    out.push('$');
                    rest = &tail[1..];
                }
            }
        }
        out.push_str(rest);

        (out, count)
    }
}
