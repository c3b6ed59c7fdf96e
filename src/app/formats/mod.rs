pub mod controld;
pub mod mikrotik;
pub mod unifi;

pub use controld::ControlDList;
pub use mikrotik::MikroTikScript;
pub use unifi::UniFiScript;

use crate::core::{ListFormat, OutputTargets};

/// All supported formats in emission order.
pub fn all_formats(targets: &OutputTargets) -> Vec<Box<dyn ListFormat>> {
    vec![
        Box::new(ControlDList::new(targets.controld_path.clone())),
        Box::new(MikroTikScript::new(
            targets.mikrotik_path.clone(),
            targets.mikrotik_list.clone(),
        )),
        Box::new(UniFiScript::new(
            targets.unifi_path.clone(),
            targets.unifi_group.clone(),
        )),
    ]
}
