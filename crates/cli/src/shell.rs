//! Menu-driven interactive session.

use std::io::{BufRead, Write};

use bookstack_core::InventoryError;
use bookstack_inventory::{Book, InventoryStore, NewBook, seed};
use bookstack_reports::{
    LONG_BOOK_PAGES, ReportKind, SearchCriteria, advanced_search, aggregate_stats,
    availability_summary, average_price_of_long_books, collection_stats, genre_counts,
    group_by_decade, in_stock_by_author, in_stock_titles_by_price, search_titles,
    sort_by_genre_then_price,
};

use crate::config::ShellConfig;
use crate::error::ShellResult;
use crate::render;

const MAIN_MENU: &str = "
==========================
SISTEMA DE GESTIÓN DE LIBROS
==========================
1. Mostrar pila de libros
2. Agregar libro manualmente
3. Quitar último libro
4. Mostrar estadísticas
5. Reinicializar con libros base
6. Agregar 10 libros adicionales
7. Operaciones avanzadas
8. Salir
";

const PROMPT: &str = "Seleccione una opción: ";

/// Selection that leaves the advanced menu.
const ADVANCED_BACK: &str = "11";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Interactive session over an owned inventory.
pub struct Shell<R, W> {
    input: R,
    output: W,
    store: InventoryStore,
    config: ShellConfig,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, config: ShellConfig) -> Self {
        Self {
            input,
            output,
            store: InventoryStore::new(),
            config,
        }
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user picks "exit" or input ends.
    pub fn run(&mut self) -> ShellResult<()> {
        if self.config.seed_on_start {
            self.load_base_catalog()?;
        }

        loop {
            write!(self.output, "{MAIN_MENU}")?;
            let Some(selection) = self.prompt(PROMPT)? else {
                break;
            };

            if self.dispatch_main(&selection)? == Flow::Quit {
                break;
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn dispatch_main(&mut self, selection: &str) -> ShellResult<Flow> {
        match selection {
            "1" => render::stack(&mut self.output, self.store.list())?,
            "2" => return self.add_book(),
            "3" => self.remove_last()?,
            "4" => render::collection_stats(&mut self.output, &collection_stats(self.store.list()))?,
            "5" => self.load_base_catalog()?,
            "6" => {
                self.store.extend(seed::additional_titles());
                writeln!(
                    self.output,
                    "Se han agregado {} libros adicionales.\n",
                    seed::ADDITIONAL_TITLES_LEN
                )?;
            }
            "7" => return self.advanced_menu(),
            "8" => {
                writeln!(self.output, "Saliendo del sistema...")?;
                return Ok(Flow::Quit);
            }
            other => {
                tracing::debug!(selection = other, "invalid main menu selection");
                writeln!(self.output, "Opción no válida.\n")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn load_base_catalog(&mut self) -> ShellResult<()> {
        self.store.replace_all(seed::base_catalog());
        writeln!(self.output, "Se han cargado los libros iniciales.\n")?;
        render::stack(&mut self.output, self.store.list())
    }

    fn add_book(&mut self) -> ShellResult<Flow> {
        let Some(title) = self.prompt("Título del libro: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(author) = self.prompt("Autor: ")? else {
            return Ok(Flow::Quit);
        };

        let book = Book::new(NewBook::manual(title, author));
        writeln!(self.output, "Libro \"{}\" agregado exitosamente.\n", book.title)?;
        self.store.append(book);
        Ok(Flow::Continue)
    }

    fn remove_last(&mut self) -> ShellResult<()> {
        match self.store.remove_last() {
            Ok(book) => writeln!(self.output, "Se eliminó \"{}\" de la pila.\n", book.title)?,
            Err(InventoryError::EmptyInventory) => {
                writeln!(self.output, "No hay libros para eliminar.\n")?
            }
        }
        Ok(())
    }

    fn advanced_menu(&mut self) -> ShellResult<Flow> {
        loop {
            self.write_advanced_menu()?;
            let Some(selection) = self.prompt(PROMPT)? else {
                return Ok(Flow::Quit);
            };
            let selection = selection.as_str();

            if selection == ADVANCED_BACK {
                return Ok(Flow::Continue);
            }

            match ReportKind::from_menu(selection) {
                Some(kind) if kind.needs_keyword() => {
                    let Some(keyword) = self.prompt("Palabra clave: ")? else {
                        return Ok(Flow::Quit);
                    };
                    self.run_report(kind, &keyword)?;
                }
                Some(kind) => self.run_report(kind, "")?,
                None => {
                    tracing::debug!(selection, "invalid advanced menu selection");
                    writeln!(self.output, "Opción inválida.\n")?;
                }
            }
        }
    }

    fn write_advanced_menu(&mut self) -> ShellResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "---- OPERACIONES AVANZADAS ----")?;
        for kind in ReportKind::ALL {
            writeln!(self.output, "{}. {}", kind.menu_number(), kind.label())?;
        }
        writeln!(self.output, "{ADVANCED_BACK}. Volver")?;
        Ok(())
    }

    /// Run one advanced report against the current inventory.
    pub fn run_report(&mut self, kind: ReportKind, keyword: &str) -> ShellResult<()> {
        tracing::debug!(report = ?kind, books = self.store.len(), "running report");
        let books = self.store.list();
        let out = &mut self.output;

        match kind {
            ReportKind::InStockByPrice => render::json_block(
                out,
                "Títulos de libros en stock ordenados por precio:",
                &in_stock_titles_by_price(books),
            ),
            ReportKind::GenreCounts => {
                render::json_block(out, "Conteo por género:", &genre_counts(books))
            }
            ReportKind::LongBookAveragePrice => {
                match average_price_of_long_books(books, LONG_BOOK_PAGES) {
                    Some(avg) => {
                        writeln!(out)?;
                        writeln!(
                            out,
                            "Precio promedio de libros con más de {LONG_BOOK_PAGES} páginas:"
                        )?;
                        writeln!(out, "{}", render::amount(avg))?;
                        writeln!(out)?;
                    }
                    None => {
                        writeln!(out)?;
                        writeln!(out, "No hay libros con más de {LONG_BOOK_PAGES} páginas.")?;
                        writeln!(out)?;
                    }
                }
                Ok(())
            }
            ReportKind::AuthorInStock => render::json_block(
                out,
                &format!("Libros de {} en stock:", self.config.author),
                &in_stock_by_author(books, &self.config.author),
            ),
            ReportKind::GenreThenPrice => render::json_block(
                out,
                "Libros ordenados por género y precio:",
                &sort_by_genre_then_price(books),
            ),
            ReportKind::ByDecade => render::decades(out, &group_by_decade(books)),
            ReportKind::AvailabilitySummary => {
                render::json_block(out, "Resumen de libros:", &availability_summary(books))
            }
            ReportKind::AdvancedSearch => render::json_block(
                out,
                "Libros que cumplen criterios avanzados:",
                &advanced_search(books, &SearchCriteria::default()),
            ),
            ReportKind::AggregateStats => render::aggregate_stats(out, &aggregate_stats(books)),
            ReportKind::TitleSearch => render::json_block(
                out,
                &format!("Resultados de búsqueda por \"{keyword}\":"),
                &search_titles(books, keyword),
            ),
        }
    }

    /// Print `label` and read one line; `None` once input is exhausted.
    fn prompt(&mut self, label: &str) -> ShellResult<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            tracing::debug!("input closed");
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(script: &str, config: ShellConfig) -> (String, InventoryStore) {
        let mut shell = Shell::new(Cursor::new(script.to_string()), Vec::new(), config);
        shell.run().unwrap();
        let store = shell.store().clone();
        let output = String::from_utf8(shell.into_output()).unwrap();
        (output, store)
    }

    fn unseeded() -> ShellConfig {
        ShellConfig {
            seed_on_start: false,
            ..ShellConfig::default()
        }
    }

    #[test]
    fn starts_seeded_and_exits_on_eight() {
        let (out, store) = session("8\n", ShellConfig::default());
        assert_eq!(store.len(), seed::BASE_CATALOG_LEN);
        assert!(out.contains("Se han cargado los libros iniciales."));
        assert!(out.contains("1. El Señor de los Anillos: La Comunidad del Anillo - J.R.R. Tolkien"));
        assert!(out.ends_with("Saliendo del sistema...\n"));
    }

    #[test]
    fn end_of_input_ends_session() {
        let (out, store) = session("", unseeded());
        assert!(store.is_empty());
        assert!(out.contains("SISTEMA DE GESTIÓN DE LIBROS"));
    }

    #[test]
    fn adds_book_with_manual_defaults() {
        let (out, store) = session("2\nFicciones\nJorge Luis Borges\n8\n", unseeded());
        assert!(out.contains("Libro \"Ficciones\" agregado exitosamente."));
        let book = store.last().unwrap();
        assert_eq!(book.title, "Ficciones");
        assert_eq!(book.author, "Jorge Luis Borges");
        assert_eq!(book.price, 50000.0);
    }

    #[test]
    fn removing_from_empty_stack_is_reported_not_fatal() {
        let (out, store) = session("3\n8\n", unseeded());
        assert!(out.contains("No hay libros para eliminar."));
        assert!(store.is_empty());
    }

    #[test]
    fn remove_reports_title_of_last_book() {
        let (out, store) = session("3\n8\n", ShellConfig::default());
        assert!(out.contains("Se eliminó \"El retrato de Dorian Gray\" de la pila."));
        assert_eq!(store.len(), seed::BASE_CATALOG_LEN - 1);
    }

    #[test]
    fn additional_titles_are_appended() {
        let (out, store) = session("6\n8\n", ShellConfig::default());
        assert!(out.contains("Se han agregado 10 libros adicionales."));
        assert_eq!(
            store.len(),
            seed::BASE_CATALOG_LEN + seed::ADDITIONAL_TITLES_LEN
        );
    }

    #[test]
    fn reinitialising_replaces_contents() {
        let (_, store) = session("6\n5\n8\n", ShellConfig::default());
        assert_eq!(store.len(), seed::BASE_CATALOG_LEN);
    }

    #[test]
    fn invalid_selections_are_reported() {
        let (out, _) = session("9\n7\n42\n11\n8\n", unseeded());
        assert!(out.contains("Opción no válida."));
        assert!(out.contains("Opción inválida."));
    }

    #[test]
    fn selections_are_matched_verbatim() {
        let (out, _) = session("7\n03\n+3\n 3\n11\n 1\n01\n8\n", unseeded());
        assert_eq!(out.matches("Opción inválida.").count(), 3);
        assert_eq!(out.matches("Opción no válida.").count(), 2);
        assert!(!out.contains("No hay libros con más de 400 páginas."));
        assert!(!out.contains("La pila está vacía."));
    }

    #[test]
    fn entered_text_is_kept_as_typed() {
        let (out, store) = session("2\n Ficciones \nBorges\n7\n10\n harry\n11\n8\n", unseeded());
        assert!(out.contains("Libro \" Ficciones \" agregado exitosamente."));
        assert_eq!(store.last().unwrap().title, " Ficciones ");
        assert!(out.contains("Resultados de búsqueda por \" harry\":"));
    }

    #[test]
    fn long_book_report_without_long_books() {
        let (out, _) = session("7\n3\n11\n8\n", unseeded());
        assert!(out.contains("No hay libros con más de 400 páginas."));
    }

    #[test]
    fn title_search_prompts_for_keyword() {
        let (out, _) = session("7\n10\nharry\n11\n8\n", ShellConfig::default());
        assert!(out.contains("Resultados de búsqueda por \"harry\":"));
        assert!(out.contains("\"title\": \"Harry Potter y la piedra filosofal\""));
        assert!(out.contains("\"author\": \"J.K. Rowling\""));
    }

    #[test]
    fn author_report_uses_configured_author() {
        let config = ShellConfig {
            author: "George Orwell".to_string(),
            ..ShellConfig::default()
        };
        let (out, _) = session("7\n4\n11\n8\n", config);
        assert!(out.contains("Libros de George Orwell en stock:"));
        assert!(out.contains("\"title\": \"1984\""));
    }
}
