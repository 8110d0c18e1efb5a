//! City-definition text format.
//!
//! One city per line, space separated:
//!
//! ```text
//! [*]<disease 0-3> <city_name> <neighbour_name>...
//! ```
//!
//! A leading `*` marks the start city (exactly one is required). Names are
//! normalised from `snake_case` to title case (`san_francisco` becomes
//! `San Francisco`). A blank line ends the definitions.

use std::fs;
use std::path::Path;

use log::{info, trace};

use super::city::CityId;
use super::disease::DiseaseType;
use super::graph::{CityGraph, MAX_CITIES};
use crate::core::error::{ParseError, SetupError};

struct ParsedLine {
    name: String,
    neighbours: Vec<String>,
    line: usize,
}

/// `san_francisco` -> `San Francisco`.
#[must_use]
pub fn title_case(raw: &str) -> String {
    raw.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Parse city definitions into a graph.
///
/// ```
/// use pandemic_sim::map::{parse_cities, DiseaseType};
///
/// let graph = parse_cities("0 A B D\n*0 B A D\n0 C A\n1 D A B").unwrap();
/// assert_eq!(graph.len(), 4);
/// assert_eq!(graph.name(graph.start()), "B");
/// assert_eq!(graph.city(graph.id_of("D")).disease(), DiseaseType::Red);
/// ```
pub fn parse_cities(text: &str) -> Result<CityGraph, ParseError> {
    let mut graph = CityGraph::empty();
    let mut parsed = Vec::new();
    let mut start: Option<CityId> = None;

    for (ix, raw) in text.lines().enumerate() {
        let line = ix + 1;
        let mut content = raw.trim();
        if content.is_empty() {
            break;
        }

        let is_start = content.starts_with('*');
        if is_start {
            if start.is_some() {
                return Err(ParseError::DuplicateStartCity { line });
            }
            content = &content[1..];
        }

        let mut fields = content.split_whitespace();
        let (Some(disease_field), Some(name_field)) = (fields.next(), fields.next()) else {
            return Err(ParseError::MissingField { line });
        };

        let value: i64 = disease_field.parse().map_err(|_| ParseError::NotANumber {
            line,
            value: disease_field.to_string(),
        })?;
        let disease = usize::try_from(value)
            .ok()
            .and_then(DiseaseType::from_index)
            .ok_or(ParseError::InvalidDisease { line, value })?;

        if graph.len() == MAX_CITIES {
            return Err(ParseError::TooManyCities { line, max: MAX_CITIES });
        }
        let name = title_case(name_field);
        let id = graph
            .add_city(name.clone(), disease)
            .ok_or_else(|| ParseError::DuplicateCity { line, name: name.clone() })?;
        if is_start {
            start = Some(id);
        }

        parsed.push(ParsedLine {
            name,
            neighbours: fields.map(title_case).collect(),
            line,
        });
    }

    let start = start.ok_or(ParseError::MissingStartCity)?;
    graph.set_start(start);

    for entry in &parsed {
        let city = graph.id_of(&entry.name);
        for neighbour in &entry.neighbours {
            let other = graph.find(neighbour).ok_or_else(|| ParseError::UnknownNeighbour {
                city: entry.name.clone(),
                neighbour: neighbour.clone(),
            })?;
            graph.connect(city, other);
        }
        trace!("line {}: {} has {} neighbours", entry.line, entry.name, entry.neighbours.len());
    }

    info!("Found {} cities, starting in {}", graph.len(), graph.name(start));
    Ok(graph)
}

/// Read and parse a city-definition file.
pub fn load_cities(path: impl AsRef<Path>) -> Result<CityGraph, SetupError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SetupError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Reading {}", path.display());
    Ok(parse_cities(&text)?)
}
