use std::collections::BTreeSet;

use super::catalog::{Catalog, TaxDocument};

/// What the user has gathered and which questions are open, for one visit
/// to the checklist screen.
///
/// Ids are only accepted when the catalog knows them, so both sets always
/// hold catalog-owned `'static` keys.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChecklistSelection {
    catalog: Catalog,
    checked_docs: BTreeSet<&'static str>,
    expanded_questions: BTreeSet<&'static str>,
}

impl ChecklistSelection {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            checked_docs: BTreeSet::new(),
            expanded_questions: BTreeSet::new(),
        }
    }

    pub fn catalog(&self) -> Catalog {
        self.catalog
    }

    /// Flips the checked state of a document.
    ///
    /// Returns the new state, or `None` when the id is not in the catalog
    /// (the selection is left untouched).
    pub fn toggle_document(&mut self, id: &str) -> Option<bool> {
        let doc = self.catalog.document(id)?;
        Some(flip(&mut self.checked_docs, doc.id))
    }

    /// Flips the expanded state of a question, `None` for unknown ids.
    pub fn toggle_question_expanded(&mut self, id: &str) -> Option<bool> {
        let question = self.catalog.question(id)?;
        Some(flip(&mut self.expanded_questions, question.id))
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.checked_docs.contains(id)
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded_questions.contains(id)
    }

    pub fn checked_count(&self) -> usize {
        self.checked_docs.len()
    }

    /// Whole percentage of catalog documents checked, rounded half up.
    pub fn progress(&self) -> u8 {
        let total = self.catalog.documents.len();
        if total == 0 {
            return 0;
        }
        // round(100 * c / t) == floor((200 * c + t) / (2 * t))
        let percent = (200 * self.checked_docs.len() + total) / (2 * total);
        percent.min(100) as u8
    }

    /// Related documents of a question in the order the question lists them.
    /// Ids missing from the catalog are skipped, unknown questions yield nothing.
    pub fn documents_for_question<'a>(
        &'a self,
        question_id: &str,
    ) -> impl Iterator<Item = &'static TaxDocument> + 'a {
        let related: &'static [&'static str] = self
            .catalog
            .question(question_id)
            .map(|q| q.related_docs)
            .unwrap_or(&[]);
        related.iter().filter_map(move |doc_id| self.catalog.document(doc_id))
    }

    /// Essential documents not checked yet, in catalog order.
    pub fn essential_outstanding(&self) -> impl Iterator<Item = &'static TaxDocument> + '_ {
        self.catalog
            .documents
            .iter()
            .filter(move |doc| doc.essential && !self.is_checked(doc.id))
    }
}

fn flip(set: &mut BTreeSet<&'static str>, id: &'static str) -> bool {
    if set.remove(id) {
        false
    } else {
        set.insert(id);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::catalog::{Question, TAX_DOCUMENTS};

    fn selection() -> ChecklistSelection {
        ChecklistSelection::new(Catalog::default())
    }

    #[test]
    fn toggling_twice_restores_previous_selection() {
        let mut sel = selection();
        sel.toggle_document("t4");
        let before = sel.clone();

        assert_eq!(sel.toggle_document("rrsp"), Some(true));
        assert_eq!(sel.toggle_document("rrsp"), Some(false));
        assert_eq!(sel, before);
    }

    #[test]
    fn toggle_sequence_is_symmetric_difference() {
        let mut sel = selection();
        for id in ["t4", "t5", "noa", "t5", "medical", "t4", "t3"] {
            sel.toggle_document(id);
        }

        let checked: Vec<_> = TAX_DOCUMENTS
            .iter()
            .map(|doc| doc.id)
            .filter(|id| sel.is_checked(id))
            .collect();
        assert_eq!(checked, vec!["medical", "t3", "noa"]);
    }

    #[test]
    fn unknown_document_is_rejected() {
        let mut sel = selection();
        assert_eq!(sel.toggle_document("w2"), None);
        assert_eq!(sel.checked_count(), 0);
        assert!(!sel.is_checked("w2"));
    }

    #[test]
    fn progress_bounds_and_rounding() {
        let mut sel = selection();
        assert_eq!(sel.progress(), 0);

        sel.toggle_document("t4");
        assert_eq!(sel.progress(), 7);

        for doc in TAX_DOCUMENTS.iter().skip(1) {
            sel.toggle_document(doc.id);
        }
        assert_eq!(sel.progress(), 100);
    }

    #[test]
    fn progress_rounds_half_up() {
        const DOCS: &[TaxDocument] = &[
            TaxDocument { id: "a", name: "A", description: "", essential: false },
            TaxDocument { id: "b", name: "B", description: "", essential: false },
            TaxDocument { id: "c", name: "C", description: "", essential: false },
            TaxDocument { id: "d", name: "D", description: "", essential: false },
            TaxDocument { id: "e", name: "E", description: "", essential: false },
            TaxDocument { id: "f", name: "F", description: "", essential: false },
            TaxDocument { id: "g", name: "G", description: "", essential: false },
            TaxDocument { id: "h", name: "H", description: "", essential: false },
        ];
        let mut sel = ChecklistSelection::new(Catalog { documents: DOCS, questions: &[] });
        // 1/8 = 12.5%
        sel.toggle_document("a");
        assert_eq!(sel.progress(), 13);
    }

    #[test]
    fn progress_strictly_increases_as_documents_are_checked() {
        let mut sel = selection();
        let mut last = sel.progress();
        for doc in TAX_DOCUMENTS {
            sel.toggle_document(doc.id);
            let now = sel.progress();
            assert!(now > last, "{} did not raise progress past {}", doc.id, last);
            last = now;
        }
    }

    #[test]
    fn investment_question_resolves_in_order() {
        let sel = selection();
        let names: Vec<_> = sel.documents_for_question("investment").map(|doc| doc.name).collect();
        assert_eq!(names, vec!["T5 Slip", "T3 Slip"]);
    }

    #[test]
    fn missing_related_documents_are_skipped() {
        const QS: &[Question] = &[Question {
            id: "foreign",
            question: "Did you earn income abroad?",
            related_docs: &["t1135", "t5", "w2"],
        }];
        let sel = ChecklistSelection::new(Catalog { documents: TAX_DOCUMENTS, questions: QS });

        let ids: Vec<_> = sel.documents_for_question("foreign").map(|doc| doc.id).collect();
        assert_eq!(ids, vec!["t5"]);
        assert_eq!(sel.documents_for_question("nope").count(), 0);
    }

    #[test]
    fn question_expansion_toggles() {
        let mut sel = selection();
        assert_eq!(sel.toggle_question_expanded("rental"), Some(true));
        assert!(sel.is_expanded("rental"));
        assert_eq!(sel.toggle_question_expanded("rental"), Some(false));
        assert!(!sel.is_expanded("rental"));
        assert_eq!(sel.toggle_question_expanded("crypto"), None);
    }

    #[test]
    fn essential_outstanding_shrinks_as_checked() {
        let mut sel = selection();
        let ids: Vec<_> = sel.essential_outstanding().map(|doc| doc.id).collect();
        assert_eq!(ids, vec!["t4", "rrsp", "medical", "charity", "noa"]);

        sel.toggle_document("medical");
        sel.toggle_document("t5");
        let ids: Vec<_> = sel.essential_outstanding().map(|doc| doc.id).collect();
        assert_eq!(ids, vec!["t4", "rrsp", "charity", "noa"]);
    }
}
