//! Catalogue of the advanced reports offered to the user.

/// The advanced reports, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    InStockByPrice,
    GenreCounts,
    LongBookAveragePrice,
    AuthorInStock,
    GenreThenPrice,
    ByDecade,
    AvailabilitySummary,
    AdvancedSearch,
    AggregateStats,
    TitleSearch,
}

impl ReportKind {
    pub const ALL: [ReportKind; 10] = [
        ReportKind::InStockByPrice,
        ReportKind::GenreCounts,
        ReportKind::LongBookAveragePrice,
        ReportKind::AuthorInStock,
        ReportKind::GenreThenPrice,
        ReportKind::ByDecade,
        ReportKind::AvailabilitySummary,
        ReportKind::AdvancedSearch,
        ReportKind::AggregateStats,
        ReportKind::TitleSearch,
    ];

    /// 1-based position in the advanced menu.
    pub fn menu_number(self) -> usize {
        Self::ALL
            .iter()
            .position(|k| *k == self)
            .map_or(0, |i| i + 1)
    }

    /// Look up a menu selection. Only the exact number text matches: `"3"`
    /// selects, `" 3"`, `"03"` and `"+3"` do not.
    pub fn from_menu(selection: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.menu_number().to_string() == selection)
    }

    pub fn label(self) -> &'static str {
        match self {
            ReportKind::InStockByPrice => "Filtrar y ordenar por precio",
            ReportKind::GenreCounts => "Contar por género",
            ReportKind::LongBookAveragePrice => "Precio promedio (+400 páginas)",
            ReportKind::AuthorInStock => "Libros del autor en stock",
            ReportKind::GenreThenPrice => "Ordenar por género y precio",
            ReportKind::ByDecade => "Libros por década",
            ReportKind::AvailabilitySummary => "Resumen de libros",
            ReportKind::AdvancedSearch => "Búsqueda avanzada",
            ReportKind::AggregateStats => "Estadísticas generales",
            ReportKind::TitleSearch => "Buscar por palabra clave",
        }
    }

    /// Whether the report needs a keyword from the user before running.
    pub fn needs_keyword(self) -> bool {
        matches!(self, ReportKind::TitleSearch)
    }
}
