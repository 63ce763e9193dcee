//! Text rendering of inventory listings and reports.

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use bookstack_core::round_to_cents;
use bookstack_inventory::Book;
use bookstack_reports::{AggregateStats, CollectionStats, DecadeTotals};

use crate::error::ShellResult;

pub const RULE: &str = "----------";

/// Write `heading` followed by `value` as indented JSON.
pub fn json_block<W, T>(out: &mut W, heading: &str, value: &T) -> ShellResult<()>
where
    W: Write,
    T: Serialize + ?Sized,
{
    writeln!(out)?;
    writeln!(out, "{heading}")?;
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    writeln!(out)?;
    Ok(())
}

/// Numbered listing of the whole stack, in insertion order.
pub fn stack<W: Write>(out: &mut W, books: &[Book]) -> ShellResult<()> {
    writeln!(out, "LISTA DE LIBROS EN LA PILA:")?;
    writeln!(out)?;
    if books.is_empty() {
        writeln!(out, "La pila está vacía.")?;
    } else {
        for (i, book) in books.iter().enumerate() {
            writeln!(out, "{}", stack_line(i + 1, book))?;
        }
    }
    writeln!(out)?;
    writeln!(out, "{RULE}")?;
    writeln!(out)?;
    Ok(())
}

pub fn stack_line(position: usize, book: &Book) -> String {
    format!(
        "{position}. {} - {} [{}] (${})",
        book.title, book.author, book.genre, book.price
    )
}

pub fn collection_stats<W: Write>(out: &mut W, stats: &CollectionStats) -> ShellResult<()> {
    writeln!(out, "ESTADÍSTICAS DE LA COLECCIÓN")?;
    writeln!(out, "Total de libros: {}", stats.total)?;
    writeln!(out, "Precio total: ${}", amount(stats.total_price))?;
    writeln!(out, "Precio promedio: ${}", amount(stats.average_price))?;
    writeln!(
        out,
        "Distribución por género: {}",
        serde_json::to_string(&stats.genres)?
    )?;
    writeln!(out)?;
    writeln!(out, "----------------------------")?;
    writeln!(out)?;
    Ok(())
}

pub fn aggregate_stats<W: Write>(out: &mut W, stats: &AggregateStats) -> ShellResult<()> {
    writeln!(out)?;
    writeln!(out, "Estadísticas generales:")?;
    writeln!(out, "Total de libros: {}", stats.total_count)?;
    writeln!(out, "Libros en stock: {}", stats.in_stock_count)?;
    writeln!(out, "Precio promedio: {}", optional_amount(stats.average_price))?;
    writeln!(out, "Páginas promedio: {}", optional_amount(stats.average_page_count))?;
    writeln!(out)?;
    Ok(())
}

pub fn decades<W: Write>(out: &mut W, decades: &BTreeMap<i64, DecadeTotals>) -> ShellResult<()> {
    json_block(out, "Libros por década:", decades)
}

/// Amount rounded to cents and always shown with two decimals.
pub fn amount(value: f64) -> String {
    format!("{:.2}", round_to_cents(value))
}

/// Two-decimal amount, or `n/a` when there is nothing to average.
pub fn optional_amount(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), amount)
}
