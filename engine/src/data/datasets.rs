//! Static dataset declarations
//!
//! Each dataset binds a database view to a fixed projection, a default
//! sort column and a filter table. The engine is parameterized over these
//! declarations; nothing in them is derived from request input.

use crate::data::filters::{FilterKind, FilterSpec};

/// Value class of a projected column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Number,
    Date,
}

/// One projected column: physical name, value class and export width
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub kind: ColumnKind,
    /// Column width in the exported worksheet (Excel character units)
    pub width: f64,
}

/// A queryable dataset: view, projection, ordering and filters
#[derive(Debug, Clone, Copy)]
pub struct DatasetSpec {
    pub name: &'static str,
    pub view: &'static str,
    /// Projection and export columns, in output order
    pub columns: &'static [ColumnSpec],
    /// Column driving `ORDER BY ... DESC` and the latest-date probe
    pub sort_column: &'static str,
    pub filters: &'static [FilterSpec],
}

const fn text(name: &'static str, width: f64) -> ColumnSpec {
    ColumnSpec {
        name,
        kind: ColumnKind::Text,
        width,
    }
}

const fn number(name: &'static str, width: f64) -> ColumnSpec {
    ColumnSpec {
        name,
        kind: ColumnKind::Number,
        width,
    }
}

const fn date(name: &'static str, width: f64) -> ColumnSpec {
    ColumnSpec {
        name,
        kind: ColumnKind::Date,
        width,
    }
}

/// Equipment removal/installation movements
pub static EQUIPAMENTOS: DatasetSpec = DatasetSpec {
    name: "equipamentos",
    view: "dbo.vw_equipe_removido",
    columns: &[
        text("Instalação", 14.0),
        text("Nota", 12.0),
        text("Cliente", 28.0),
        text("Texto breve para o code", 32.0),
        text("Alavanca", 12.0),
        date("Data Conclusão", 14.0),
        text("Equipamento Removido", 22.0),
        text("Material Removido", 18.0),
        text("Descrição Mat. Removido", 30.0),
        text("Status Equip. Removido", 20.0),
        text("Equipamento Instalado", 22.0),
        text("Material Instalado", 18.0),
        text("Descrição Mat. Instalado", 30.0),
        text("Status Equip. Instalado", 20.0),
    ],
    sort_column: "Data Conclusão",
    filters: &[
        FilterSpec {
            name: "periodo",
            column: "Data Conclusão",
            kind: FilterKind::DateRange {
                start_key: "dataInicial",
                end_key: "dataFinal",
            },
        },
        FilterSpec {
            name: "equipamento",
            column: "Equipamento Removido",
            kind: FilterKind::ExactOrList,
        },
        FilterSpec {
            name: "nota",
            column: "Nota",
            kind: FilterKind::ExactOrList,
        },
    ],
};

/// Material movements
pub static MATERIAIS: DatasetSpec = DatasetSpec {
    name: "materiais",
    view: "dbo.vw_materiais",
    columns: &[
        text("Instalação", 14.0),
        text("Nota", 12.0),
        text("Cliente", 28.0),
        date("Data Conclusão", 14.0),
        text("Material Removido", 18.0),
        text("Descrição Mat. Removido", 30.0),
        number("Quantidade", 12.0),
        text("Material Instalado", 18.0),
        text("Descrição Mat. Instalado", 30.0),
    ],
    sort_column: "Data Conclusão",
    filters: &[
        FilterSpec {
            name: "periodo",
            column: "Data Conclusão",
            kind: FilterKind::DateRange {
                start_key: "dataInicial",
                end_key: "dataFinal",
            },
        },
        FilterSpec {
            name: "material",
            column: "Material Removido",
            kind: FilterKind::ExactOrList,
        },
        FilterSpec {
            name: "nota",
            column: "Nota",
            kind: FilterKind::ExactOrList,
        },
    ],
};

/// Look up a dataset by its public name
pub fn dataset_by_name(name: &str) -> Option<&'static DatasetSpec> {
    match name {
        "equipamentos" => Some(&EQUIPAMENTOS),
        "materiais" => Some(&MATERIAIS),
        _ => None,
    }
}
