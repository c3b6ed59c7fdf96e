use crate::core::ListFormat;

/// Plain one-domain-per-line list for ControlD custom rules.
#[derive(Debug, Clone)]
pub struct ControlDList {
    output_path: String,
}

impl ControlDList {
    pub fn new(output_path: String) -> Self {
        Self { output_path }
    }
}

impl ListFormat for ControlDList {
    fn name(&self) -> &str {
        "ControlD"
    }

    fn syntax(&self) -> &str {
        "Domain List"
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn usage(&self) -> String {
        [
            "# ControlD Custom Rules Format",
            "# Usage: Import this list into ControlD Custom Rules",
            "#",
            "# 1. Go to ControlD Dashboard > Filters > Custom Rules",
            "# 2. Create a new folder or select existing",
            "# 3. Import this file or copy domains below",
            "# 4. Set action to 'REDIRECT' to route through specific resolver/VPN",
            "#",
            "",
            "",
        ]
        .join("\n")
    }

    fn format_entry(&self, domain: &str) -> String {
        domain.to_string()
    }
}
