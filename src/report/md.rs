use crate::types::report::ScoreReport;
use crate::types::scoring::CategoryStatus;

pub fn to_markdown(report: &ScoreReport) -> String {
    let mut output = String::new();
    output.push_str("# Application Security Scores\n\n");
    output.push_str(&format!(
        "Generated {} with config {}\n\n",
        report.generated_at.to_rfc3339(),
        report.config_fingerprint
    ));
    if let Some(average) = report.average_total() {
        output.push_str(&format!(
            "Applications: {}, average total: {:.1}\n\n",
            report.entries.len(),
            average
        ));
    }

    if report.entries.is_empty() {
        output.push_str("- no applications found\n");
        return output;
    }

    output.push_str("| Application | Knowledge | Tools | Total |\n");
    output.push_str("|---|---:|---:|---:|\n");
    for entry in &report.entries {
        let result = &entry.breakdown.result;
        output.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            entry.application, result.knowledge_score, result.tool_score, result.total_score
        ));
    }
    output.push('\n');

    for entry in &report.entries {
        let knowledge = &entry.breakdown.knowledge;
        let tools = &entry.breakdown.tools;
        output.push_str(&format!("## {}\n\n", entry.application));
        output.push_str(&format!(
            "- knowledge: {}/{} fields filled, completeness {:.1}, freshness {:.1}\n",
            knowledge.fields_filled, knowledge.fields_total, knowledge.completeness, knowledge.freshness
        ));
        if !knowledge.missing_fields.is_empty() {
            output.push_str(&format!(
                "- missing: {}\n",
                knowledge.missing_fields.join(", ")
            ));
        }
        output.push_str(&format!(
            "- risk weight: {:.2}, achieved {:.2} of {:.2} possible\n",
            tools.risk_weight, tools.total_achieved, tools.total_possible
        ));
        for category in &tools.categories {
            let detail = match &category.status {
                CategoryStatus::NotApplicable => "not applicable".to_string(),
                CategoryStatus::Missing => "not implemented".to_string(),
                CategoryStatus::Scored {
                    tool,
                    tier,
                    integration_level,
                    integration_weight,
                    tool_weight,
                    ..
                } => format!(
                    "{tool} ({tier:?}, weight {tool_weight:.2}), level {integration_level} (weight {integration_weight:.2})"
                ),
            };
            output.push_str(&format!(
                "  - {}: {:.2}/{:.2} {}\n",
                category.category.label(),
                category.achieved_points,
                category.max_points,
                detail
            ));
        }
        output.push('\n');
    }

    output
}
