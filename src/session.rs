use crate::dataset::parser::ParseOutcome;
use crate::dataset::record::QuestionRecord;

/// In-memory store of one loaded dataset. Built once at startup from a parse,
/// mutated only through played flags, discarded on exit.
pub struct Session {
    records: Vec<QuestionRecord>,
    categories: Vec<String>,
}

impl Session {
    pub fn new(outcome: ParseOutcome) -> Self {
        Self {
            records: outcome.records,
            categories: outcome.categories,
        }
    }

    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            categories: Vec::new(),
        }
    }

    pub fn find(&self, category: &str, difficulty: u32) -> Option<&QuestionRecord> {
        self.records
            .iter()
            .find(|r| r.category == category && r.difficulty == difficulty)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&QuestionRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Idempotent; an unknown id is a no-op.
    pub fn mark_played(&mut self, id: &str) {
        if let Some(record) = self.records.iter_mut().find(|r| r.id() == id) {
            record.played = true;
        }
    }

    /// Unplayed records in original parse order.
    pub fn unplayed(&self) -> Vec<&QuestionRecord> {
        self.records.iter().filter(|r| !r.played).collect()
    }

    pub fn records(&self) -> &[QuestionRecord] {
        &self.records
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn played_count(&self) -> usize {
        self.records.iter().filter(|r| r.played).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::parser::{self, SchemaVariant};

    fn session() -> Session {
        let text = "Kategorie;Schwierigkeit;Frage;Lösung\n\
                    Geo;100;F1?;L1\n\
                    Geo;200;F2?;L2\n\
                    Sport;100;F3?;L3\n";
        Session::new(parser::parse(text, SchemaVariant::Wide))
    }

    #[test]
    fn test_find_by_category_and_difficulty() {
        let session = session();
        assert_eq!(session.find("Geo", 200).unwrap().prompt, "F2?");
        assert!(session.find("Geo", 300).is_none());
        assert!(session.find("Kunst", 100).is_none());
    }

    #[test]
    fn test_find_by_id() {
        let session = session();
        assert_eq!(session.find_by_id("Sport-100").unwrap().prompt, "F3?");
        assert!(session.find_by_id("Sport-999").is_none());
    }

    #[test]
    fn test_mark_played_is_idempotent() {
        let mut session = session();
        session.mark_played("Geo-100");
        session.mark_played("Geo-100");
        assert!(session.find_by_id("Geo-100").unwrap().played);
        assert_eq!(session.played_count(), 1);
    }

    #[test]
    fn test_mark_played_unknown_id_is_a_no_op() {
        let mut session = session();
        session.mark_played("Niemand-100");
        assert_eq!(session.played_count(), 0);
    }

    #[test]
    fn test_unplayed_keeps_parse_order() {
        let mut session = session();
        session.mark_played("Geo-200");
        let ids: Vec<String> = session.unplayed().iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec!["Geo-100", "Sport-100"]);
    }

    #[test]
    fn test_empty_session() {
        let session = Session::empty();
        assert!(session.is_empty());
        assert_eq!(session.len(), 0);
        assert!(session.unplayed().is_empty());
        assert!(session.categories().is_empty());
    }
}
