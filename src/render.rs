//! Plain-text rendering of an analysis report

use std::fmt::Write as FmtWrite;

use pagelens_core::AnalysisReport;

const DIVIDER: &str = "─────────────────────────────────────────────────────────────";
const LABEL_WIDTH: usize = 16;

pub fn render_report(report: &AnalysisReport) -> String {
    let mut output = String::new();

    push_section_header(&mut output, "🔎", &format!("Page Analysis: {}", report.url));
    push_key_value(&mut output, "Status", &status_label(report.status_code));

    if !report.is_success() {
        push_key_value(&mut output, "Error", &report.error);
        return output;
    }

    push_key_value(&mut output, "HTML Version", report.html_version.label());
    push_key_value(
        &mut output,
        "Title",
        if report.title.is_empty() { "(none)" } else { report.title.as_str() },
    );
    let _ = writeln!(&mut output);

    push_section_header(&mut output, "📑", "Headings");
    for (level, count) in report.headings.iter() {
        push_key_value(&mut output, &format!("h{level}"), &count.to_string());
    }
    let _ = writeln!(&mut output);

    push_section_header(&mut output, "🔗", "Links");
    push_key_value(&mut output, "Internal", &report.internal_links.to_string());
    push_key_value(&mut output, "External", &report.external_links.to_string());
    push_key_value(&mut output, "Inaccessible", &report.inaccessible_links.to_string());
    let _ = writeln!(&mut output);

    push_section_header(&mut output, "🔐", "Forms");
    push_key_value(
        &mut output,
        "Login Form",
        if report.has_login_form { "yes" } else { "no" },
    );

    output
}

fn status_label(status_code: u16) -> String {
    if status_code == 0 {
        "no response".to_string()
    } else {
        status_code.to_string()
    }
}

fn push_section_header(buf: &mut String, icon: &str, title: &str) {
    let _ = writeln!(buf, "{DIVIDER}");
    let _ = writeln!(buf, "{icon} {title}");
    let _ = writeln!(buf, "{DIVIDER}");
}

fn push_key_value(buf: &mut String, label: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    let _ = writeln!(buf, "• {:<width$} : {}", label, value, width = LABEL_WIDTH);
}
