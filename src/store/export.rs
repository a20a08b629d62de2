use std::path::Path;

use crate::error::Result;
use crate::models::OptimizationResult;

/// Write one row per stock item with its leftover and weight.
pub fn write_waste_csv<P: AsRef<Path>>(path: P, result: &OptimizationResult) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "item_id",
        "item_name",
        "unit",
        "days_left",
        "urgency",
        "leftover",
        "waste_weight",
        "weighted_waste",
    ])?;

    for entry in &result.waste_estimate {
        wtr.write_record([
            entry.item_id.clone(),
            entry.item_name.clone(),
            entry.unit.clone(),
            entry.days_left.to_string(),
            entry.urgency.label().to_string(),
            format!("{:.3}", entry.leftover),
            format!("{:.3}", entry.waste_weight),
            format!("{:.3}", entry.weighted()),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Constraints, Ingredient, Recipe, StockItem};
    use crate::optimizer::optimize;
    use tempfile::NamedTempFile;

    #[test]
    fn test_write_waste_csv() {
        let stock = vec![
            StockItem::new("1", "Eggs", 10.0, "pieces", 1),
            StockItem::new("2", "Rice", 1000.0, "g", 30),
        ];
        let recipes = vec![Recipe::new(
            "eggs",
            "Boiled Eggs",
            5.0,
            vec![Ingredient::new("Eggs", 2.0, "pieces")],
        )];
        let result = optimize(&stock, &recipes, Constraints::new(1, 1));

        let file = NamedTempFile::new().unwrap();
        write_waste_csv(file.path(), &result).unwrap();

        let mut rdr = csv::Reader::from_path(file.path()).unwrap();
        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][1], "Eggs");
        assert_eq!(&rows[0][4], "critical");
        assert_eq!(&rows[1][4], "fresh");
    }
}
