use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use crate::config::Garden;
use crate::target::Target;

pub fn target_table(target: &Target, garden: Option<&Garden>) -> Table {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Target")
                .add_attribute(Attribute::Bold)
                .set_alignment(comfy_table::CellAlignment::Left),
            Cell::new(""),
        ]);

    for (label, name) in [
        ("Garden", target.garden_name()),
        ("Project", target.project_name()),
        ("Seed", target.seed_name()),
        ("Shoot", target.shoot_name()),
    ] {
        if !name.is_empty() {
            table.add_row(vec![label, name]);
        }
    }

    if target.control_plane() {
        table.add_row(vec!["Control Plane", "yes"]);
    }

    if let Some(kubeconfig) = garden.and_then(|g| g.kubeconfig.as_deref()) {
        table.add_row(vec!["Kubeconfig", kubeconfig]);
    }

    table
}
