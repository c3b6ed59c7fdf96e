use crate::core::ListFormat;

/// USG / VyOS configuration session adding domains to a domain-group.
#[derive(Debug, Clone)]
pub struct UniFiScript {
    output_path: String,
    group_name: String,
}

impl UniFiScript {
    pub fn new(output_path: String, group_name: String) -> Self {
        Self {
            output_path,
            group_name,
        }
    }
}

impl ListFormat for UniFiScript {
    fn name(&self) -> &str {
        "UniFi/VyOS"
    }

    fn syntax(&self) -> &str {
        "VyOS/EdgeOS Script"
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn usage(&self) -> String {
        format!(
            "# UniFi Security Gateway (USG) / VyOS Script\n\
             # Usage: Connect via SSH and paste these commands\n\
             #\n\
             # This creates a domain-group named '{group}' with all domains\n\
             # Use this group in your firewall and policy routing rules\n\
             #\n\
             # Example policy route:\n\
             # configure\n\
             # set policy route VPN_ROUTE rule 10 destination group domain-group {group}\n\
             # set policy route VPN_ROUTE rule 10 set table 1\n\
             # commit\n\
             # save\n\
             #\n\
             \n",
            group = self.group_name
        )
    }

    fn preamble(&self) -> &str {
        "configure\n\n"
    }

    fn format_entry(&self, domain: &str) -> String {
        format!(
            "set firewall group domain-group {} address '{}'",
            self.group_name, domain
        )
    }

    fn trailer(&self) -> &str {
        "\ncommit\nsave\nexit\n"
    }
}
