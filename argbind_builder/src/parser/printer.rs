use crate::matcher::Definitions;

const PADDING_WIDTH: usize = 3;
const MAIN_INDENT: usize = 1;

/// A rendered row, prior to column alignment.
struct Row<'a> {
    long: &'a str,
    short: &'a str,
    help: String,
}

pub(crate) struct Printer<'a> {
    optional_prefix: &'a str,
    default_description: &'a str,
}

impl<'a> Printer<'a> {
    pub(crate) fn new(optional_prefix: &'a str, default_description: &'a str) -> Self {
        Self {
            optional_prefix,
            default_description,
        }
    }

    /// Render the description line, followed by one aligned row per definition.
    ///
    /// Continuation lines of a multi-line help message are indented to the help column.
    pub(crate) fn render<S>(&self, definitions: &Definitions<S>) -> String {
        let rows: Vec<Row> = definitions
            .iter()
            .map(|definition| {
                let tags = definition.tags();
                let description = definition.field().description();
                let help = if definition.is_optional() {
                    if description.is_empty() {
                        self.optional_prefix.to_string()
                    } else {
                        format!("{} {description}", self.optional_prefix)
                    }
                } else {
                    description.to_string()
                };

                Row {
                    long: tags.long().unwrap_or_default(),
                    short: tags.short().unwrap_or_default(),
                    help,
                }
            })
            .collect();
        let long_width = rows.iter().map(|r| r.long.len()).max().unwrap_or_default();
        let short_width = rows.iter().map(|r| r.short.len()).max().unwrap_or_default();
        let help_indent = MAIN_INDENT + long_width + short_width + (PADDING_WIDTH * 2);
        let padding = format!("{:PADDING_WIDTH$}", "");

        let mut out = vec![
            definitions
                .description()
                .unwrap_or(self.default_description)
                .to_string(),
            String::default(),
        ];

        for Row { long, short, help } in rows {
            let mut lines = help.lines();
            let first = lines.next().unwrap_or_default();
            let line = format!(
                "{:MAIN_INDENT$}{long:long_width$}{padding}{short:short_width$}{padding}{first}",
                ""
            );
            out.push(line.trim_end().to_string());

            for continuation in lines {
                let line = format!("{:help_indent$}{continuation}", "");
                out.push(line.trim_end().to_string());
            }
        }

        out.join("\n")
    }
}
