//! Built-in catalogs used to populate the inventory.
//!
//! [`base_catalog`] is the starting collection (loaded with
//! [`InventoryStore::replace_all`](crate::InventoryStore::replace_all));
//! [`additional_titles`] is a second batch meant to be appended on top.

use crate::book::{Book, BookFormat, NewBook};

/// Number of books in [`base_catalog`].
pub const BASE_CATALOG_LEN: usize = 14;

/// Number of books in [`additional_titles`].
pub const ADDITIONAL_TITLES_LEN: usize = 10;

struct SeedRow {
    title: &'static str,
    author: &'static str,
    genre: &'static str,
    language: &'static str,
    price: f64,
    format: BookFormat,
    isbn: &'static str,
    description: &'static str,
    condition: &'static str,
    location: &'static str,
    publication_year: &'static str,
    publisher: &'static str,
    page_count: u32,
    dimensions: &'static str,
    weight: &'static str,
}

impl SeedRow {
    fn to_new_book(&self) -> NewBook {
        NewBook {
            title: self.title.to_string(),
            author: self.author.to_string(),
            genre: self.genre.to_string(),
            language: self.language.to_string(),
            price: self.price,
            format: self.format,
            isbn: self.isbn.to_string(),
            description: self.description.to_string(),
            condition: self.condition.to_string(),
            location: self.location.to_string(),
            publication_year: self.publication_year.to_string(),
            publisher: self.publisher.to_string(),
            page_count: self.page_count,
            dimensions: self.dimensions.to_string(),
            weight: self.weight.to_string(),
            in_stock: None,
        }
    }
}

const BASE_CATALOG: [SeedRow; BASE_CATALOG_LEN] = [
    SeedRow {
        title: "El Señor de los Anillos: La Comunidad del Anillo",
        author: "J.R.R. Tolkien",
        genre: "fantasía",
        language: "inglés",
        price: 90000.0,
        format: BookFormat::Hardcover,
        isbn: "9780261103573",
        description: "Una épica aventura en la Tierra Media",
        condition: "nuevo",
        location: "A1",
        publication_year: "1954",
        publisher: "Allen & Unwin",
        page_count: 423,
        dimensions: "23x15cm",
        weight: "0.9kg",
    },
    SeedRow {
        title: "1984",
        author: "George Orwell",
        genre: "ficción",
        language: "español",
        price: 45000.0,
        format: BookFormat::Paperback,
        isbn: "9781234567890",
        description: "Distopía política",
        condition: "nuevo",
        location: "A2",
        publication_year: "1949",
        publisher: "Secker & Warburg",
        page_count: 328,
        dimensions: "20x13cm",
        weight: "0.5kg",
    },
    SeedRow {
        title: "Cien años de soledad",
        author: "Gabriel García Márquez",
        genre: "ficción",
        language: "español",
        price: 60000.0,
        format: BookFormat::Hardcover,
        isbn: "9788497592208",
        description: "Realismo mágico",
        condition: "como nuevo",
        location: "B1",
        publication_year: "1967",
        publisher: "Sudamericana",
        page_count: 471,
        dimensions: "22x15cm",
        weight: "0.7kg",
    },
    SeedRow {
        title: "Don Quijote de la Mancha",
        author: "Miguel de Cervantes",
        genre: "clásico",
        language: "español",
        price: 70000.0,
        format: BookFormat::Paperback,
        isbn: "9788491050292",
        description: "Obra maestra del Siglo de Oro",
        condition: "excelente",
        location: "B2",
        publication_year: "1605",
        publisher: "Francisco de Robles",
        page_count: 863,
        dimensions: "23x15cm",
        weight: "1.0kg",
    },
    SeedRow {
        title: "Los miserables",
        author: "Victor Hugo",
        genre: "clásico",
        language: "francés",
        price: 85000.0,
        format: BookFormat::Hardcover,
        isbn: "9780140444308",
        description: "Historia de justicia y redención",
        condition: "usado",
        location: "B3",
        publication_year: "1862",
        publisher: "A. Lacroix",
        page_count: 1463,
        dimensions: "24x16cm",
        weight: "1.2kg",
    },
    SeedRow {
        title: "Harry Potter y la piedra filosofal",
        author: "J.K. Rowling",
        genre: "fantasía",
        language: "español",
        price: 50000.0,
        format: BookFormat::Paperback,
        isbn: "9788478884452",
        description: "Inicio de la saga del joven mago",
        condition: "nuevo",
        location: "C1",
        publication_year: "1997",
        publisher: "Salamandra",
        page_count: 320,
        dimensions: "21x14cm",
        weight: "0.4kg",
    },
    SeedRow {
        title: "El Hobbit",
        author: "J.R.R. Tolkien",
        genre: "fantasía",
        language: "inglés",
        price: 55000.0,
        format: BookFormat::Ebook,
        isbn: "9780547928227",
        description: "Aventura fantástica",
        condition: "nuevo",
        location: "C2",
        publication_year: "1937",
        publisher: "Allen & Unwin",
        page_count: 310,
        dimensions: "20x14cm",
        weight: "0.4kg",
    },
    SeedRow {
        title: "El nombre del viento",
        author: "Patrick Rothfuss",
        genre: "fantasía",
        language: "inglés",
        price: 65000.0,
        format: BookFormat::Paperback,
        isbn: "9788499082479",
        description: "Crónica del Asesino de Reyes",
        condition: "nuevo",
        location: "C3",
        publication_year: "2007",
        publisher: "DAW Books",
        page_count: 662,
        dimensions: "22x15cm",
        weight: "0.8kg",
    },
    SeedRow {
        title: "Los juegos del hambre",
        author: "Suzanne Collins",
        genre: "ciencia ficción",
        language: "inglés",
        price: 40000.0,
        format: BookFormat::Paperback,
        isbn: "9780439023481",
        description: "Distopía juvenil",
        condition: "nuevo",
        location: "C4",
        publication_year: "2008",
        publisher: "Scholastic",
        page_count: 374,
        dimensions: "21x13cm",
        weight: "0.5kg",
    },
    SeedRow {
        title: "Fahrenheit 451",
        author: "Ray Bradbury",
        genre: "ciencia ficción",
        language: "inglés",
        price: 45000.0,
        format: BookFormat::Ebook,
        isbn: "9781451673319",
        description: "Sociedad donde los libros están prohibidos",
        condition: "nuevo",
        location: "C5",
        publication_year: "1953",
        publisher: "Ballantine Books",
        page_count: 249,
        dimensions: "19x12cm",
        weight: "0.3kg",
    },
    SeedRow {
        title: "El código Da Vinci",
        author: "Dan Brown",
        genre: "misterio",
        language: "español",
        price: 50000.0,
        format: BookFormat::Paperback,
        isbn: "9780307474278",
        description: "Thriller de misterio y religión",
        condition: "bueno",
        location: "D1",
        publication_year: "2003",
        publisher: "Doubleday",
        page_count: 489,
        dimensions: "22x14cm",
        weight: "0.6kg",
    },
    SeedRow {
        title: "La sombra del viento",
        author: "Carlos Ruiz Zafón",
        genre: "ficción",
        language: "español",
        price: 60000.0,
        format: BookFormat::Hardcover,
        isbn: "9788408172177",
        description: "Misterio en la Barcelona de posguerra",
        condition: "nuevo",
        location: "D2",
        publication_year: "2001",
        publisher: "Planeta",
        page_count: 565,
        dimensions: "23x15cm",
        weight: "0.8kg",
    },
    SeedRow {
        title: "El alquimista",
        author: "Paulo Coelho",
        genre: "ficción",
        language: "portugués",
        price: 40000.0,
        format: BookFormat::Paperback,
        isbn: "9780061122415",
        description: "Viaje espiritual y búsqueda personal",
        condition: "como nuevo",
        location: "D3",
        publication_year: "1988",
        publisher: "HarperOne",
        page_count: 208,
        dimensions: "20x13cm",
        weight: "0.4kg",
    },
    SeedRow {
        title: "El retrato de Dorian Gray",
        author: "Oscar Wilde",
        genre: "clásico",
        language: "inglés",
        price: 35000.0,
        format: BookFormat::Ebook,
        isbn: "9780141439570",
        description: "Una novela sobre la belleza y la corrupción",
        condition: "excelente",
        location: "D4",
        publication_year: "1890",
        publisher: "Ward, Lock and Company",
        page_count: 254,
        dimensions: "20x13cm",
        weight: "0.4kg",
    },
];

const ADDITIONAL_TITLES: [SeedRow; ADDITIONAL_TITLES_LEN] = [
    SeedRow {
        title: "Dune",
        author: "Frank Herbert",
        genre: "ciencia ficción",
        language: "inglés",
        price: 70000.0,
        format: BookFormat::Hardcover,
        isbn: "9780441172719",
        description: "Planeta desértico y política galáctica",
        condition: "nuevo",
        location: "E1",
        publication_year: "1965",
        publisher: "Chilton Books",
        page_count: 412,
        dimensions: "22x15cm",
        weight: "0.8kg",
    },
    SeedRow {
        title: "Neuromante",
        author: "William Gibson",
        genre: "ciencia ficción",
        language: "inglés",
        price: 60000.0,
        format: BookFormat::Paperback,
        isbn: "9780441569595",
        description: "El origen del ciberpunk",
        condition: "nuevo",
        location: "E2",
        publication_year: "1984",
        publisher: "Ace Books",
        page_count: 271,
        dimensions: "21x13cm",
        weight: "0.4kg",
    },
    SeedRow {
        title: "El perfume",
        author: "Patrick Süskind",
        genre: "ficción",
        language: "alemán",
        price: 50000.0,
        format: BookFormat::Paperback,
        isbn: "9780143122975",
        description: "Historia de un asesino con olfato perfecto",
        condition: "usado",
        location: "E3",
        publication_year: "1985",
        publisher: "Diogenes Verlag",
        page_count: 255,
        dimensions: "21x14cm",
        weight: "0.4kg",
    },
    SeedRow {
        title: "El club de la lucha",
        author: "Chuck Palahniuk",
        genre: "ficción",
        language: "inglés",
        price: 45000.0,
        format: BookFormat::Paperback,
        isbn: "9780393327342",
        description: "Crítica social y dualidad",
        condition: "nuevo",
        location: "E4",
        publication_year: "1996",
        publisher: "W.W. Norton",
        page_count: 218,
        dimensions: "20x13cm",
        weight: "0.3kg",
    },
    SeedRow {
        title: "American Gods",
        author: "Neil Gaiman",
        genre: "fantasía",
        language: "inglés",
        price: 60000.0,
        format: BookFormat::Ebook,
        isbn: "9780062472106",
        description: "Dioses antiguos en el mundo moderno",
        condition: "nuevo",
        location: "E5",
        publication_year: "2001",
        publisher: "HarperCollins",
        page_count: 465,
        dimensions: "22x15cm",
        weight: "0.6kg",
    },
    SeedRow {
        title: "El libro de arena",
        author: "Jorge Luis Borges",
        genre: "ficción",
        language: "español",
        price: 40000.0,
        format: BookFormat::Paperback,
        isbn: "9789875669439",
        description: "Relatos metafísicos y filosóficos",
        condition: "bueno",
        location: "E6",
        publication_year: "1975",
        publisher: "Emecé",
        page_count: 181,
        dimensions: "20x13cm",
        weight: "0.3kg",
    },
    SeedRow {
        title: "Pedro Páramo",
        author: "Juan Rulfo",
        genre: "ficción",
        language: "español",
        price: 35000.0,
        format: BookFormat::Paperback,
        isbn: "9786070707739",
        description: "Realismo mágico mexicano",
        condition: "usado",
        location: "E7",
        publication_year: "1955",
        publisher: "Fondo de Cultura Económica",
        page_count: 124,
        dimensions: "20x13cm",
        weight: "0.2kg",
    },
    SeedRow {
        title: "Rayuela",
        author: "Julio Cortázar",
        genre: "ficción",
        language: "español",
        price: 60000.0,
        format: BookFormat::Hardcover,
        isbn: "9788437604947",
        description: "Novela experimental y lúdica",
        condition: "nuevo",
        location: "E8",
        publication_year: "1963",
        publisher: "Sudamericana",
        page_count: 736,
        dimensions: "23x15cm",
        weight: "0.8kg",
    },
    SeedRow {
        title: "La casa de los espíritus",
        author: "Isabel Allende",
        genre: "ficción",
        language: "español",
        price: 55000.0,
        format: BookFormat::Paperback,
        isbn: "9788401013408",
        description: "Saga familiar y realismo mágico",
        condition: "nuevo",
        location: "E9",
        publication_year: "1982",
        publisher: "Plaza & Janés",
        page_count: 490,
        dimensions: "22x14cm",
        weight: "0.7kg",
    },
    SeedRow {
        title: "Los detectives salvajes",
        author: "Roberto Bolaño",
        genre: "ficción",
        language: "español",
        price: 70000.0,
        format: BookFormat::Hardcover,
        isbn: "9788433966773",
        description: "Viaje poético y existencial",
        condition: "nuevo",
        location: "E10",
        publication_year: "1998",
        publisher: "Anagrama",
        page_count: 609,
        dimensions: "23x15cm",
        weight: "0.9kg",
    },
];

/// Starting collection, every book stamped with the current time.
pub fn base_catalog() -> Vec<Book> {
    BASE_CATALOG
        .iter()
        .map(|row| Book::new(row.to_new_book()))
        .collect()
}

/// Second batch of titles, appended after whatever is already stocked.
pub fn additional_titles() -> Vec<Book> {
    ADDITIONAL_TITLES
        .iter()
        .map(|row| Book::new(row.to_new_book()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalogs_have_expected_sizes() {
        assert_eq!(base_catalog().len(), BASE_CATALOG_LEN);
        assert_eq!(additional_titles().len(), ADDITIONAL_TITLES_LEN);
    }

    #[test]
    fn base_catalog_starts_with_tolkien() {
        let books = base_catalog();
        let first = &books[0];
        assert_eq!(first.title, "El Señor de los Anillos: La Comunidad del Anillo");
        assert_eq!(first.price, 90000.0);
        assert_eq!(first.page_count, 423);
        assert_eq!(first.year(), 1954);
        assert_eq!(first.format, BookFormat::Hardcover);
    }

    #[test]
    fn isbns_are_unique_across_catalogs() {
        let isbns: HashSet<String> = base_catalog()
            .into_iter()
            .chain(additional_titles())
            .map(|b| b.isbn)
            .collect();
        assert_eq!(isbns.len(), BASE_CATALOG_LEN + ADDITIONAL_TITLES_LEN);
    }

    #[test]
    fn seeded_books_are_untracked_and_therefore_in_stock() {
        assert!(base_catalog().iter().all(|b| b.in_stock.is_none() && b.is_in_stock()));
    }

    #[test]
    fn additional_titles_include_one_borges() {
        let borges: Vec<_> = additional_titles()
            .into_iter()
            .filter(|b| b.author == "Jorge Luis Borges")
            .collect();
        assert_eq!(borges.len(), 1);
        assert_eq!(borges[0].title, "El libro de arena");
    }
}
