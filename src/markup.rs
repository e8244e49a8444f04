//! HTML fragments for an analysis result, using the same class names and
//! inline styles as the web front end.

use std::fmt::Write as _;

use crate::presentation::{CategoryBar, ResultView};

/// Overall verdict block.
pub fn overall_result_html(view: &ResultView) -> String {
    let profile = view.profile;
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<div class="overall-result {}">"#,
        html_escape(profile.class_name)
    );
    let _ = writeln!(out, r#"  <div class="result-icon">{}</div>"#, html_escape(profile.icon));
    let _ = writeln!(out, r#"  <h3 class="result-title">{}</h3>"#, html_escape(profile.title));
    let _ = writeln!(
        out,
        r#"  <p class="result-description">{}</p>"#,
        html_escape(profile.description)
    );
    let _ = writeln!(
        out,
        r#"  <div style="margin-top: 1rem; font-size: 1.25rem; font-weight: 600;">{}</div>"#,
        html_escape(&view.score_text)
    );
    if let Some(notice) = view.demo_notice {
        let _ = writeln!(
            out,
            r#"  <p style="margin-top: 1rem; font-size: 0.875rem; opacity: 0.7;">{}</p>"#,
            html_escape(notice)
        );
    }
    out.push_str("</div>\n");
    out
}

/// One labeled bar of the category breakdown.
pub fn category_item_html(bar: &CategoryBar) -> String {
    let color = html_escape(bar.color);
    let mut out = String::new();
    out.push_str("<div class=\"category-item\">\n");
    out.push_str("  <div class=\"category-header\">\n");
    let _ = writeln!(
        out,
        r#"    <span class="category-name">{}</span>"#,
        html_escape(&bar.display_name)
    );
    let _ = writeln!(
        out,
        r#"    <span class="category-score" style="color: {color};">{}</span>"#,
        html_escape(&bar.percentage)
    );
    out.push_str("  </div>\n");
    out.push_str("  <div class=\"category-bar\">\n");
    let _ = writeln!(
        out,
        r#"    <div class="category-fill" style="width: {}; background: {color};"></div>"#,
        html_escape(&bar.fill_width)
    );
    out.push_str("  </div>\n</div>\n");
    out
}

/// Overall block followed by every category item, in prediction order.
pub fn results_html(view: &ResultView) -> String {
    let mut out = overall_result_html(view);
    out.push_str("<div class=\"categories\">\n");
    for bar in &view.bars {
        out.push_str(&category_item_html(bar));
    }
    out.push_str("</div>\n");
    out
}

fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::{DEMO_MODE_NOTICE, level_profile};
    use crate::service::ToxicityLevel;

    fn view(bars: Vec<CategoryBar>, demo: bool) -> ResultView {
        ResultView {
            profile: level_profile(ToxicityLevel::Toxic),
            is_toxic: true,
            score_text: "Toxicity Score: 87.3%".to_string(),
            demo_notice: demo.then_some(DEMO_MODE_NOTICE),
            bars,
        }
    }

    #[test]
    fn category_item_carries_width_and_color() {
        let html = category_item_html(&CategoryBar::new("toxic", 0.873));
        assert!(html.contains(r#"<span class="category-name">Toxic</span>"#));
        assert!(html.contains(r#"style="color: #ef4444;">87.3%</span>"#));
        assert!(html.contains(r#"style="width: 87.3%; background: #ef4444;""#));
    }

    #[test]
    fn overall_block_uses_profile_class_and_demo_notice() {
        let html = overall_result_html(&view(Vec::new(), true));
        assert!(html.starts_with(r#"<div class="overall-result toxic">"#));
        assert!(html.contains("Toxic Comment Detected"));
        assert!(html.contains("Toxicity Score: 87.3%"));
        assert!(html.contains("Demo Mode"));
        assert!(!overall_result_html(&view(Vec::new(), false)).contains("Demo Mode"));
    }

    #[test]
    fn category_names_are_escaped() {
        let html = category_item_html(&CategoryBar::new("<b>&bold", 0.5));
        assert!(html.contains("&lt;b&gt;&amp;bold"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn results_list_bars_in_order() {
        let html = results_html(&view(
            vec![CategoryBar::new("threat", 0.2), CategoryBar::new("insult", 0.4)],
            false,
        ));
        let threat = html.find("Threat").unwrap();
        let insult = html.find("Insult").unwrap();
        assert!(threat < insult);
        assert_eq!(html, results_html(&view(
            vec![CategoryBar::new("threat", 0.2), CategoryBar::new("insult", 0.4)],
            false,
        )));
    }
}
