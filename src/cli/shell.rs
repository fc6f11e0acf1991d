//! Interactive menu shell
//!
//! Renders the explorer's current view, reads one line of input, applies it,
//! and repeats until the user quits or input ends. All output goes to the
//! writer given at construction so scripted sessions can be inspected.

use std::io::{self, Write};

use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::application::services::ExplorerService;
use crate::cli::output::{numbered_place, place_details, place_line, render_tree};
use crate::domain::{HistoryEntry, NavState, NavView, PlaceId, Strategy, TraversalOrder};
use crate::infrastructure::traits::LineInput;

/// Whether the loop continues after handling a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Shell<'a, I: LineInput, W: Write> {
    explorer: &'a mut ExplorerService,
    input: I,
    out: W,
    rng: StdRng,
}

impl<'a, I: LineInput, W: Write> Shell<'a, I, W> {
    pub fn new(explorer: &'a mut ExplorerService, input: I, out: W) -> Self {
        Self {
            explorer,
            input,
            out,
            rng: StdRng::from_entropy(),
        }
    }

    /// Use a fixed random source (reproducible surprise picks).
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Run the menu loop until `q` or end of input.
    pub fn run(&mut self, show_random_pick: bool) -> io::Result<()> {
        writeln!(self.out, "{}", "Welcome to Hidden Gems!".bold())?;
        if show_random_pick {
            match self.explorer.surprise(&mut self.rng) {
                Some(id) => self.write_pick("Random Pick:", id)?,
                None => writeln!(self.out, "No places added yet.")?,
            }
        }

        loop {
            let flow = match self.explorer.nav_state() {
                NavState::Home => self.home()?,
                NavState::InCategory(_) | NavState::InSubcategory { .. } => self.browse()?,
            };
            if flow == Flow::Quit {
                break;
            }
        }

        writeln!(self.out, "Thanks for exploring with us!")?;
        self.out.flush()
    }

    fn prompt(&mut self, msg: &str) -> io::Result<Option<String>> {
        write!(self.out, "{} ", msg.cyan())?;
        self.out.flush()?;
        Ok(self.input.read_line()?.map(|line| line.trim().to_string()))
    }

    fn invalid(&mut self, what: &str) -> io::Result<()> {
        writeln!(self.out, "{} {}", "✗".red(), what)
    }

    fn write_pick(&mut self, label: &str, id: PlaceId) -> io::Result<()> {
        if let Some(place) = self.explorer.place(id) {
            writeln!(self.out, "{} {}", label, place)?;
        }
        Ok(())
    }

    /// Parse a 1-based menu index.
    fn index(choice: &str, len: usize) -> Option<usize> {
        choice
            .parse::<usize>()
            .ok()
            .filter(|&n| n >= 1 && n <= len)
            .map(|n| n - 1)
    }

    // ------------------------------------------------------------
    // Screens
    // ------------------------------------------------------------

    fn home(&mut self) -> io::Result<Flow> {
        let menu: Vec<String> = self
            .explorer
            .menu()
            .iter()
            .map(|entry| entry.name.clone())
            .collect();

        writeln!(self.out, "\n{}", "What are you looking for today?".bold())?;
        for (i, name) in menu.iter().enumerate() {
            writeln!(self.out, "[{}] {}", i + 1, name)?;
        }
        writeln!(
            self.out,
            "[s] Search  [n] Nearby  [r] Surprise me  [t] Traversal  [c] Recommend  [h] History  [f] Favorites  [q] Exit"
        )?;

        let Some(choice) = self.prompt("Enter your choice:")? else {
            return Ok(Flow::Quit);
        };
        debug!("home: choice={:?}", choice);

        match choice.as_str() {
            "q" => Ok(Flow::Quit),
            "s" => self.search(),
            "n" => self.nearby(),
            "r" => {
                match self.explorer.surprise(&mut self.rng) {
                    Some(id) => self.write_pick("Surprise Pick:", id)?,
                    None => writeln!(self.out, "No places to pick from!")?,
                }
                Ok(Flow::Continue)
            }
            "t" => self.traversal(),
            "c" => self.recommend_menu(),
            "h" => {
                self.history()?;
                Ok(Flow::Continue)
            }
            "f" => {
                self.favorites()?;
                Ok(Flow::Continue)
            }
            other => {
                match Self::index(other, menu.len()) {
                    Some(i) => match self.explorer.enter_category(&menu[i]) {
                        Ok(outcome) => {
                            if let NavView::EmptyCategory(name) = outcome.view {
                                writeln!(
                                    self.out,
                                    "No places to show under {}. Returning to homepage...",
                                    name
                                )?;
                            }
                        }
                        Err(e) => self.invalid(&e.to_string())?,
                    },
                    None => self.invalid("Invalid choice. Please choose a valid option.")?,
                }
                Ok(Flow::Continue)
            }
        }
    }

    /// Screen for a category or subcategory position.
    fn browse(&mut self) -> io::Result<Flow> {
        let outcome = self.explorer.current_view();
        match outcome.view {
            NavView::Subcategories(keys) => {
                writeln!(self.out, "\nSubcategories in {}:", outcome.state)?;
                for (i, key) in keys.iter().enumerate() {
                    writeln!(self.out, "[{}] {}", i + 1, key)?;
                }
                writeln!(self.out, "[b] Go Back  [h] Home")?;

                let Some(choice) = self.prompt("Choose a subcategory or go back:")? else {
                    return Ok(Flow::Quit);
                };
                match choice.as_str() {
                    "b" => {
                        self.explorer.go_back();
                    }
                    "h" => {
                        self.explorer.go_home();
                    }
                    other => match Self::index(other, keys.len()) {
                        Some(i) => {
                            if let Err(e) = self.explorer.enter_subcategory(&keys[i]) {
                                self.invalid(&e.to_string())?;
                            }
                        }
                        None => self.invalid("Invalid selection.")?,
                    },
                }
                Ok(Flow::Continue)
            }
            NavView::Places(ids) => {
                writeln!(self.out, "\nPlaces under {}:", outcome.state)?;
                if ids.is_empty() {
                    writeln!(self.out, "No places to show.")?;
                    self.explorer.go_home();
                    return Ok(Flow::Continue);
                }
                self.place_list(&ids)
            }
            NavView::Menu(_) | NavView::EmptyCategory(_) => {
                self.explorer.go_home();
                Ok(Flow::Continue)
            }
        }
    }

    /// Numbered list with details, back, home and favorites actions.
    fn place_list(&mut self, ids: &[PlaceId]) -> io::Result<Flow> {
        if ids.is_empty() {
            writeln!(self.out, "No places to show.")?;
            return Ok(Flow::Continue);
        }
        let lines: Vec<String> = self
            .explorer
            .places(ids)
            .into_iter()
            .enumerate()
            .map(|(i, place)| numbered_place(i, place))
            .collect();
        for line in lines {
            writeln!(self.out, "{}", line)?;
        }
        writeln!(
            self.out,
            "\nOptions: [number] View Details, [b] Go Back, [h] Home, [f] View Favorites"
        )?;

        let Some(choice) = self.prompt("Enter your choice:")? else {
            return Ok(Flow::Quit);
        };
        match choice.as_str() {
            "b" => {
                self.explorer.go_back();
            }
            "h" => {
                self.explorer.go_home();
            }
            "f" => self.favorites()?,
            other => match Self::index(other, ids.len()) {
                Some(i) => return self.details(ids[i]),
                None => self.invalid("Invalid option.")?,
            },
        }
        Ok(Flow::Continue)
    }

    fn details(&mut self, id: PlaceId) -> io::Result<Flow> {
        let Some(place) = self.explorer.place(id) else {
            return Ok(Flow::Continue);
        };
        let text = place_details(place);
        self.explorer.record_view(id);
        writeln!(self.out, "\n{}", text)?;
        writeln!(
            self.out,
            "\nOptions: [f] Favorite  [r] Similar places  [p] Closest places  [b] Back"
        )?;

        let Some(choice) = self.prompt("Enter your choice:")? else {
            return Ok(Flow::Quit);
        };
        match choice.to_lowercase().as_str() {
            "f" => {
                if self.explorer.toggle_favorite(id) {
                    writeln!(self.out, "{} Added to favorites!", "✓".green())?;
                } else {
                    writeln!(self.out, "Already in favorites.")?;
                }
            }
            "r" => self.recommendations(id, Strategy::Similarity)?,
            "p" => self.recommendations(id, Strategy::Proximity)?,
            "b" => {}
            _ => self.invalid("Invalid choice.")?,
        }
        Ok(Flow::Continue)
    }

    fn recommendations(&mut self, id: PlaceId, strategy: Strategy) -> io::Result<()> {
        let name = self
            .explorer
            .place(id)
            .map(|p| p.name.clone())
            .unwrap_or_default();
        let ids = self.explorer.recommend(id, strategy);
        let lines: Vec<String> = self
            .explorer
            .places(&ids)
            .into_iter()
            .map(place_line)
            .collect();

        match strategy {
            Strategy::Similarity => writeln!(self.out, "\nRecommendations based on {}:", name)?,
            Strategy::Proximity => writeln!(self.out, "\nClosest places to {}:", name)?,
        }
        if lines.is_empty() {
            writeln!(self.out, "No recommendations found.")?;
        }
        for line in lines {
            writeln!(self.out, "- {}", line)?;
        }
        Ok(())
    }

    fn search(&mut self) -> io::Result<Flow> {
        let Some(query) = self.prompt("Enter search term:")? else {
            return Ok(Flow::Quit);
        };
        writeln!(self.out, "\nSearching for '{}'...", query)?;
        let ids = self.explorer.search(&query);
        self.place_list(&ids)
    }

    fn nearby(&mut self) -> io::Result<Flow> {
        let Some(miles) = self.prompt("Maximum distance in miles:")? else {
            return Ok(Flow::Quit);
        };
        match miles.parse::<f64>() {
            Ok(max) if max.is_finite() => {
                writeln!(self.out, "\nPlaces within {} miles:", max)?;
                let ids = self.explorer.filter_by_max_distance(max);
                self.place_list(&ids)
            }
            _ => {
                self.invalid("Invalid distance.")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn traversal(&mut self) -> io::Result<Flow> {
        writeln!(self.out, "\n[1] DFS Traversal\n[2] BFS Traversal")?;
        let Some(choice) = self.prompt("Choose traversal:")? else {
            return Ok(Flow::Quit);
        };
        let order = match choice.as_str() {
            "1" => TraversalOrder::Dfs,
            "2" => TraversalOrder::Bfs,
            _ => {
                self.invalid("Invalid choice.")?;
                return Ok(Flow::Continue);
            }
        };
        let tree = render_tree(
            &format!("Places ({})", order),
            self.explorer.traverse(order),
            self.explorer.catalog(),
        );
        writeln!(self.out, "{}", tree)?;
        Ok(Flow::Continue)
    }

    fn recommend_menu(&mut self) -> io::Result<Flow> {
        let all = self.explorer.list_all();
        if all.is_empty() {
            writeln!(self.out, "No places in the list.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.out, "\nRecommend based on:\n[1] Closeness\n[2] Similarity")?;
        let Some(kind) = self.prompt("Enter your choice:")? else {
            return Ok(Flow::Quit);
        };
        let strategy = match kind.as_str() {
            "1" => Strategy::Proximity,
            "2" => Strategy::Similarity,
            _ => {
                self.invalid("Invalid option.")?;
                return Ok(Flow::Continue);
            }
        };

        let lines: Vec<String> = self
            .explorer
            .places(&all)
            .into_iter()
            .enumerate()
            .map(|(i, place)| format!("{}. {}", i + 1, place_line(place)))
            .collect();
        for line in lines {
            writeln!(self.out, "{}", line)?;
        }
        let Some(choice) = self.prompt("Choose a reference place by number:")? else {
            return Ok(Flow::Quit);
        };
        match Self::index(&choice, all.len()) {
            Some(i) => self.recommendations(all[i], strategy)?,
            None => self.invalid("Invalid selection.")?,
        }
        Ok(Flow::Continue)
    }

    fn history(&mut self) -> io::Result<()> {
        writeln!(self.out, "\nRecently Viewed:")?;
        let lines: Vec<String> = self
            .explorer
            .history()
            .iter()
            .filter_map(|entry| match entry {
                HistoryEntry::Place(id) => self.explorer.place(*id).map(|p| p.to_string()),
                HistoryEntry::Subcategory {
                    category,
                    subcategory,
                } => Some(format!("{} / {}", category, subcategory)),
            })
            .collect();
        if lines.is_empty() {
            writeln!(self.out, "No history available.")?;
        }
        for line in lines {
            writeln!(self.out, "- {}", line)?;
        }
        Ok(())
    }

    fn favorites(&mut self) -> io::Result<()> {
        writeln!(self.out, "\nFavorites:")?;
        let ids = self.explorer.favorites();
        let lines: Vec<String> = self
            .explorer
            .places(&ids)
            .into_iter()
            .map(place_line)
            .collect();
        if lines.is_empty() {
            writeln!(self.out, "No favorites yet.")?;
        }
        for line in lines {
            writeln!(self.out, "- {}", line)?;
        }
        Ok(())
    }
}
