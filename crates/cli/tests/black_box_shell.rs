use std::io::Cursor;

use bookstack_cli::{Shell, ShellConfig};
use bookstack_inventory::seed;

/// Drive a full session from a script of input lines and return everything
/// the shell printed plus the number of books left in the inventory.
fn run_script(lines: &[&str], config: ShellConfig) -> (String, usize) {
    let mut script = lines.join("\n");
    script.push('\n');

    let mut shell = Shell::new(Cursor::new(script), Vec::new(), config);
    shell.run().expect("session should not fail");
    let remaining = shell.store().len();
    let output = String::from_utf8(shell.into_output()).expect("output is utf-8");
    (output, remaining)
}

fn unseeded() -> ShellConfig {
    ShellConfig {
        seed_on_start: false,
        ..ShellConfig::default()
    }
}

#[test]
fn genre_counts_over_base_catalog_keep_first_seen_order() {
    let (out, _) = run_script(&["7", "2", "11", "8"], ShellConfig::default());
    let expected = "Conteo por género:\n{\n  \"fantasía\": 4,\n  \"ficción\": 4,\n  \"clásico\": 3,\n  \"ciencia ficción\": 2,\n  \"misterio\": 1\n}";
    assert!(out.contains(expected), "unexpected output:\n{out}");
}

#[test]
fn long_book_average_over_base_catalog() {
    let (out, _) = run_script(&["7", "3", "11", "8"], ShellConfig::default());
    assert!(out.contains("Precio promedio de libros con más de 400 páginas:\n68571.43\n"));
}

#[test]
fn advanced_search_over_base_catalog_finds_nothing() {
    let (out, _) = run_script(&["7", "8", "11", "8"], ShellConfig::default());
    assert!(out.contains("Libros que cumplen criterios avanzados:\n[]\n"));
}

#[test]
fn borges_appears_only_after_additional_titles() {
    let (before, _) = run_script(&["7", "4", "11", "8"], ShellConfig::default());
    assert!(before.contains("Libros de Jorge Luis Borges en stock:\n[]\n"));

    let (after, len) = run_script(&["6", "7", "4", "11", "8"], ShellConfig::default());
    assert_eq!(len, seed::BASE_CATALOG_LEN + seed::ADDITIONAL_TITLES_LEN);
    assert!(after.contains("\"title\": \"El libro de arena\""));
    assert!(after.contains("\"price\": 40000\n"));
}

#[test]
fn decades_include_the_seventeenth_century() {
    let (out, _) = run_script(&["7", "6", "11", "8"], ShellConfig::default());
    assert!(out.contains("\"1600\": {\n    \"count\": 1,\n    \"total_price\": 70000\n  }"));
    let sixteen = out.find("\"1600\"").unwrap();
    let two_thousands = out.find("\"2000\"").unwrap();
    assert!(sixteen < two_thousands);
}

#[test]
fn aggregate_stats_on_empty_inventory_print_na() {
    let (out, _) = run_script(&["7", "9", "11", "8"], unseeded());
    assert!(out.contains("Total de libros: 0"));
    assert!(out.contains("Precio promedio: n/a"));
    assert!(out.contains("Páginas promedio: n/a"));
}

#[test]
fn collection_stats_on_empty_inventory_average_zero() {
    let (out, _) = run_script(&["4", "8"], unseeded());
    assert!(out.contains("ESTADÍSTICAS DE LA COLECCIÓN"));
    assert!(out.contains("Precio promedio: $0.00"));
    assert!(out.contains("Distribución por género: {}"));
}

#[test]
fn draining_the_stack_reports_empty_without_failing() {
    let (out, len) = run_script(
        &["2", "a", "x", "2", "b", "y", "2", "c", "z", "3", "3", "3", "3", "1", "8"],
        unseeded(),
    );
    assert_eq!(len, 0);
    assert!(out.contains("Se eliminó \"c\" de la pila."));
    assert!(out.contains("Se eliminó \"a\" de la pila."));
    assert!(out.contains("No hay libros para eliminar."));
    assert!(out.contains("La pila está vacía."));
}

#[test]
fn summary_lists_every_book_cheapest_first() {
    let (out, _) = run_script(&["7", "7", "11", "8"], ShellConfig::default());
    let dorian = out.find("\"title\": \"El retrato de Dorian Gray\"").unwrap();
    let tolkien = out
        .find("\"title\": \"El Señor de los Anillos: La Comunidad del Anillo\"")
        .unwrap();
    assert!(dorian < tolkien);
    assert!(out.contains("\"availability\": \"Disponible\""));
    assert!(!out.contains("\"availability\": \"Agotado\""));
}
