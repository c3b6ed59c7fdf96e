use crate::core::ListFormat;

/// RouterOS `.rsc` script filling a firewall address list.
#[derive(Debug, Clone)]
pub struct MikroTikScript {
    output_path: String,
    list_name: String,
}

impl MikroTikScript {
    pub fn new(output_path: String, list_name: String) -> Self {
        Self {
            output_path,
            list_name,
        }
    }
}

impl ListFormat for MikroTikScript {
    fn name(&self) -> &str {
        "MikroTik"
    }

    fn syntax(&self) -> &str {
        "RouterOS Script"
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn usage(&self) -> String {
        format!(
            "# MikroTik RouterOS Script\n\
             # Usage: Copy and paste into RouterOS terminal, or import as .rsc file\n\
             #\n\
             # This script creates an address list named '{list}' with all domains\n\
             # Use this list in your firewall mangle rules to route through VPN\n\
             #\n\
             # Example mangle rule:\n\
             # /ip firewall mangle add chain=prerouting dst-address-list={list} \\\\\n\
             #   action=mark-routing new-routing-mark=vpn-route passthrough=yes\n\
             #\n\
             \n",
            list = self.list_name
        )
    }

    fn format_entry(&self, domain: &str) -> String {
        format!(
            "/ip firewall address-list add list={} address={}",
            self.list_name, domain
        )
    }
}
