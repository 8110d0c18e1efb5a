//! Infection phase and epidemic resolution.

use log::info;

use super::state::Board;
use crate::cards::InfectionCard;
use crate::core::config::{EpidemicPolicy, MAX_CUBES_PER_CITY};

impl Board {
    /// Draw the top infection card, add one cube of its city's disease and
    /// discard the card.
    ///
    /// Returns `None` when the infection deck is empty.
    pub fn infect(&mut self) -> Option<InfectionCard> {
        let card = self.infection_deck.draw_top()?;
        let city = card.city();
        info!("Infecting {}", self.graph.name(city));
        self.add_disease(city);
        self.infection_discard.place_on_top(card);
        Some(card)
    }

    /// Resolve a drawn epidemic card: increase the rate, bulk-infect the
    /// bottom infection card, then intensify.
    pub fn resolve_epidemic(&mut self) -> Option<InfectionCard> {
        self.increase_infection_rate();
        let card = self.epidemic_infection();
        self.intensify();
        info!("Infection rate is now {}", self.infection_rate());
        card
    }

    /// Draw the bottom infection card and fill its city to three cubes of
    /// its own disease.
    ///
    /// Under `EpidemicPolicy::FillToThree` the bulk add never outbreaks.
    /// Under `EpidemicPolicy::Rulebook` a city that already held cubes of
    /// its disease outbreaks once after being filled.
    pub fn epidemic_infection(&mut self) -> Option<InfectionCard> {
        let card = self.infection_deck.draw_bottom()?;
        let city = card.city();
        let disease = self.graph.city(city).disease();
        let existing = self.graph.city(city).cubes(disease);

        info!("Epidemic in {} ({} cubes already)", self.graph.name(city), existing);
        for _ in existing..MAX_CUBES_PER_CITY {
            self.graph.city_mut(city).add_cube(disease);
        }
        if self.policy == EpidemicPolicy::Rulebook && existing > 0 {
            self.force_outbreak(city, disease);
        }

        self.infection_discard.place_on_top(card);
        self.outbroken.clear();
        Some(card)
    }

    /// Shuffle the infection discard pile and put it on top of the
    /// infection deck, so recently infected cities come up next.
    pub fn intensify(&mut self) {
        let mut discard = self.infection_discard.take();
        discard.shuffle(&mut self.rng);
        self.infection_deck.stack_on_top(discard);
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::cards::InfectionCard;
    use crate::core::{EpidemicPolicy, GameRng};
    use crate::map::{parse_cities, DiseaseType};

    fn board(policy: EpidemicPolicy) -> Board {
        let graph = parse_cities("*0 A B\n0 B A C\n2 C B").unwrap();
        let mut board = Board::new(graph, GameRng::new(3), policy);
        board.create_city_cards();
        board
    }

    #[test]
    fn test_infect_draws_top() {
        let mut board = board(EpidemicPolicy::default());
        let a = board.graph().id_of("A");

        let card = board.infect().unwrap();

        assert_eq!(card, InfectionCard(a));
        assert_eq!(board.city(a).cubes(DiseaseType::Yellow), 1);
        assert_eq!(board.infection_discard().top(), Some(&card));
        assert_eq!(board.infection_deck().len(), 2);
    }

    #[test]
    fn test_infect_empty_deck() {
        let mut board = board(EpidemicPolicy::default());
        while board.infect().is_some() {}

        assert!(board.infect().is_none());
        assert_eq!(board.infection_discard().len(), 3);
    }

    #[test]
    fn test_epidemic_draws_bottom_and_fills() {
        let mut board = board(EpidemicPolicy::default());
        let c = board.graph().id_of("C");
        board.add_disease(c);

        let card = board.epidemic_infection().unwrap();

        assert_eq!(card.city(), c);
        assert_eq!(board.city(c).cubes(DiseaseType::Blue), 3);
        assert_eq!(board.outbreaks(), 0);
    }

    #[test]
    fn test_epidemic_on_full_city_fill_policy() {
        let mut board = board(EpidemicPolicy::FillToThree);
        let c = board.graph().id_of("C");
        for _ in 0..3 {
            board.add_disease(c);
        }

        board.epidemic_infection();

        assert_eq!(board.outbreaks(), 0);
        assert_eq!(board.city(board.graph().id_of("B")).cubes(DiseaseType::Blue), 0);
    }

    #[test]
    fn test_epidemic_rulebook_policy_outbreaks() {
        let mut board = board(EpidemicPolicy::Rulebook);
        let c = board.graph().id_of("C");
        board.add_disease(c);

        board.epidemic_infection();

        assert_eq!(board.outbreaks(), 1);
        assert_eq!(board.city(c).cubes(DiseaseType::Blue), 3);
        assert_eq!(board.city(board.graph().id_of("B")).cubes(DiseaseType::Blue), 1);
    }

    #[test]
    fn test_epidemic_rulebook_policy_clean_city() {
        let mut board = board(EpidemicPolicy::Rulebook);

        board.epidemic_infection();

        assert_eq!(board.outbreaks(), 0);
    }

    #[test]
    fn test_intensify_puts_discards_on_top() {
        let mut board = board(EpidemicPolicy::default());
        let first = board.infect().unwrap();
        let second = board.infect().unwrap();

        board.intensify();

        assert!(board.infection_discard().is_empty());
        assert_eq!(board.infection_deck().len(), 3);
        let top: Vec<_> = board.infection_deck().iter().take(2).copied().collect();
        assert!(top.contains(&first));
        assert!(top.contains(&second));
    }

    #[test]
    fn test_resolve_epidemic() {
        let mut board = board(EpidemicPolicy::default());
        board.infect();
        board.infect();

        let card = board.resolve_epidemic().unwrap();

        assert_eq!(board.infection_rate_index(), 1);
        assert!(board.infection_discard().is_empty());
        assert_eq!(board.infection_deck().len(), 3);
        assert_eq!(card.city(), board.graph().id_of("C"));
    }
}
