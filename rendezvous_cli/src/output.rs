use comfy_table::Table;
use rendezvous_core::{DistanceMatrix, Distances, Weight};
use serde::Serialize;

pub fn format_weight(weight: Option<Weight>) -> String {
    match weight {
        Some(weight) => weight.to_string(),
        None => String::from("unreachable"),
    }
}

pub fn distances_lines(distances: &Distances) -> Vec<String> {
    distances
        .iter()
        .map(|(node, weight)| format!("{} -> {} = {}", distances.source(), node, format_weight(weight)))
        .collect()
}

pub fn matrix_table(matrix: &DistanceMatrix) -> Table {
    let mut table = Table::new();

    let mut header = vec![String::new()];
    header.extend((0..matrix.node_count()).map(|node| node.to_string()));
    table.set_header(header);

    for (source, row) in matrix.rows().enumerate() {
        let mut cells = vec![source.to_string()];
        cells.extend(row.iter().map(|&weight| match weight {
            Some(weight) => weight.to_string(),
            None => String::from("-"),
        }));
        table.add_row(cells);
    }

    table
}

pub fn to_json(value: &impl Serialize) -> Result<String, anyhow::Error> {
    Ok(serde_json::to_string_pretty(value)?)
}
