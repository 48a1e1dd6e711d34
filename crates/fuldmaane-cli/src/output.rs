//! Output formatting for the CLI.
//!
//! A [`Formatter`] turns a [`MoonReport`] (or a list of upcoming full moons)
//! into text for one rendering target. It never computes anything itself.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use fuldmaane_domain::{CalendarDate, Locale, MoonReport, Verdict};
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

/// One row of the upcoming full moon listing.
#[derive(Debug, Serialize)]
struct UpcomingEntry {
    date: CalendarDate,
    date_text: String,
    days_away: i64,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a moon report.
    pub fn format_report(&self, report: &MoonReport) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(self.format_report_text(report)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Html => Ok(format_report_html(report)),
            OutputFormat::Quiet => Ok(report.verdict.to_string()),
        }
    }

    fn format_report_text(&self, report: &MoonReport) -> String {
        let verdict = match report.answer {
            Verdict::Yes => self.colorize(report.verdict, "green"),
            Verdict::No => self.colorize(report.verdict, "red"),
        };

        [
            format!("{}  {}", report.emoji, report.phase_name),
            verdict,
            report.detail_text.clone(),
            report.last_full_moon_text.clone(),
            self.colorize(
                &format!("{} ({})", report.date_text, report.iso_date),
                "cyan",
            ),
        ]
        .join("\n")
    }

    /// Format a list of upcoming full moons counted from `from`.
    pub fn format_upcoming(
        &self,
        from: &CalendarDate,
        dates: &[CalendarDate],
        locale: Locale,
    ) -> Result<String> {
        let entries: Vec<UpcomingEntry> = dates
            .iter()
            .map(|date| UpcomingEntry {
                date: *date,
                date_text: locale.long_date(date, true),
                days_away: date.days_since(from),
            })
            .collect();

        match self.format {
            OutputFormat::Text => Ok(self.format_upcoming_table(&entries, locale)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&entries)?),
            OutputFormat::Html => Ok(format_upcoming_html(&entries)),
            OutputFormat::Quiet => Ok(entries
                .iter()
                .map(|e| e.date.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_upcoming_table(&self, entries: &[UpcomingEntry], locale: Locale) -> String {
        if entries.is_empty() {
            return self.colorize(locale.upcoming_empty(), "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(locale.upcoming_columns());

        for (i, entry) in entries.iter().enumerate() {
            builder.push_record([
                (i + 1).to_string(),
                entry.date.to_string(),
                entry.date_text.clone(),
                entry.days_away.to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().bold().to_string(),
            "green" => text.green().bold().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Page fragment using the element ids the tracker page expects.
fn format_report_html(report: &MoonReport) -> String {
    format!(
        concat!(
            "<div class=\"moon\" lang=\"{lang}\">\n",
            "  <div id=\"moonEmoji\">{emoji}</div>\n",
            "  <div id=\"answer\" class=\"answer {class}\">{verdict}</div>\n",
            "  <p id=\"details\">{details}</p>\n",
            "  <p id=\"phaseInfo\">{phase}</p>\n",
            "  <p id=\"lastFullMoon\">{last}</p>\n",
            "  <time id=\"date\" datetime=\"{iso}\">{date}</time>\n",
            "</div>"
        ),
        lang = report.locale.code(),
        emoji = report.emoji,
        class = report.answer.as_str(),
        verdict = escape_html(report.verdict),
        details = escape_html(&report.detail_text),
        phase = escape_html(report.phase_name),
        last = escape_html(&report.last_full_moon_text),
        iso = report.iso_date,
        date = escape_html(&report.date_text),
    )
}

fn format_upcoming_html(entries: &[UpcomingEntry]) -> String {
    let items: String = entries
        .iter()
        .map(|e| {
            format!(
                "  <li><time datetime=\"{}\">{}</time></li>\n",
                e.date,
                escape_html(&e.date_text)
            )
        })
        .collect();
    format!("<ul id=\"upcoming\">\n{}</ul>", items)
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_moon_report() -> MoonReport {
        MoonReport::from_phase(CalendarDate::new(2026, 10, 16), 0.5, Locale::Danish)
    }

    #[test]
    fn test_text_format() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        let output = formatter.format_report(&full_moon_report()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "🌕  Fuldmåne");
        assert_eq!(lines[1], "JA! 🎉");
        assert_eq!(lines[2], "Det er fuldmåne i nat!");
        assert_eq!(lines[3], "Sidste fuldmåne: I dag!");
        assert_eq!(lines[4], "fredag den 16. oktober 2026 (2026-10-16)");
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_report(&full_moon_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["phase_name"], "Fuldmåne");
        assert_eq!(value["verdict"], "JA! 🎉");
    }

    #[test]
    fn test_html_format() {
        let formatter = Formatter::new(OutputFormat::Html, false);
        let output = formatter.format_report(&full_moon_report()).unwrap();
        assert!(output.contains("<div id=\"answer\" class=\"answer yes\">JA! 🎉</div>"));
        assert!(output.contains("<time id=\"date\" datetime=\"2026-10-16\">"));
        assert!(output.contains("id=\"phaseInfo\">Fuldmåne<"));
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_report(&full_moon_report()).unwrap();
        assert_eq!(output, "JA! 🎉");
    }

    #[test]
    fn test_upcoming_table() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        let from = CalendarDate::new(2026, 10, 16);
        let dates = [CalendarDate::new(2026, 10, 25)];
        let output = formatter
            .format_upcoming(&from, &dates, Locale::Danish)
            .unwrap();
        assert!(output.contains("2026-10-25"));
        assert!(output.contains("søndag den 25. oktober 2026"));

        let header = output.lines().nth(1).unwrap();
        assert!(header.contains("Dato"));
        assert!(header.contains("Dage"));
        assert!(!header.contains("Days"));
    }

    #[test]
    fn test_upcoming_table_english_headers() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        let from = CalendarDate::new(2026, 10, 16);
        let dates = [CalendarDate::new(2026, 10, 25)];
        let output = formatter
            .format_upcoming(&from, &dates, Locale::English)
            .unwrap();
        assert!(output.contains("Days"));
        assert!(output.contains("Sunday, October 25, 2026"));
    }

    #[test]
    fn test_upcoming_quiet() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let from = CalendarDate::new(2026, 1, 1);
        let dates = [CalendarDate::new(2026, 1, 3), CalendarDate::new(2026, 2, 1)];
        let output = formatter
            .format_upcoming(&from, &dates, Locale::English)
            .unwrap();
        assert_eq!(output, "2026-01-03\n2026-02-01");
    }

    #[test]
    fn test_upcoming_empty() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        let output = formatter
            .format_upcoming(&CalendarDate::new(2026, 1, 1), &[], Locale::Danish)
            .unwrap();
        assert_eq!(output, "Ingen datoer ønsket.");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        assert_eq!(formatter.success("test"), "✓ test");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }
}
