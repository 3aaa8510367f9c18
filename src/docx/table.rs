use crate::model::{Cell, Row, Table};
use crate::style::{CellStyle, RowStyle, TableStyle};
use crate::units::Length;

use super::{PartReader, WML_NS, collect_block_nodes, is_wml, wml};

impl PartReader<'_> {
    /// Read a `w:tbl`. Cell content goes back through [`PartReader::read_blocks`],
    /// so nested tables come out as nested [`Table`] nodes.
    pub(super) fn read_table(&self, tbl: roxmltree::Node) -> Table {
        let style = wml(tbl, "tblPr").map(TableStyle::from_node);

        let grid: Vec<Length> = wml(tbl, "tblGrid")
            .into_iter()
            .flat_map(|g| g.children().filter(|n| is_wml(*n, "gridCol")))
            .filter_map(|col| {
                col.attribute((WML_NS, "w"))
                    .and_then(|w| w.parse::<f64>().ok())
                    .map(|w| Length::from_twips(w.round() as i64))
            })
            .collect();

        let rows = collect_block_nodes(tbl)
            .into_iter()
            .filter(|n| is_wml(*n, "tr"))
            .map(|tr| self.read_row(tr))
            .collect();

        Table { style, grid, rows }
    }

    fn read_row(&self, tr: roxmltree::Node) -> Row {
        let style = wml(tr, "trPr").map(RowStyle::from_node);
        let cells = collect_block_nodes(tr)
            .into_iter()
            .filter(|n| is_wml(*n, "tc"))
            .map(|tc| Cell {
                style: wml(tc, "tcPr").map(CellStyle::from_node),
                children: self.read_blocks(tc),
            })
            .collect();
        Row { style, cells }
    }
}
