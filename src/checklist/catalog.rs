/// A supporting document the filer may need to gather.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxDocument {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub essential: bool,
}

/// A qualifying question pointing at the documents that apply on a "yes".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: &'static str,
    pub question: &'static str,
    pub related_docs: &'static [&'static str],
}

pub const TAX_DOCUMENTS: &[TaxDocument] = &[
    TaxDocument {
        id: "t4",
        name: "T4 Slip",
        description: "Statement of employment income, showing wages and taxes deducted.",
        essential: true,
    },
    TaxDocument {
        id: "t4a",
        name: "T4A Slip",
        description: "Statement for pensions, annuities, self-employment, or other income.",
        essential: false,
    },
    TaxDocument {
        id: "t5",
        name: "T5 Slip",
        description: "Statement of investment income such as dividends and interest.",
        essential: false,
    },
    TaxDocument {
        id: "rrsp",
        name: "RRSP Contribution Receipts",
        description: "Proof of contributions to a Registered Retirement Savings Plan (RRSP) for claiming deductions.",
        essential: true,
    },
    TaxDocument {
        id: "t2202",
        name: "T2202 (Tuition and Enrolment)",
        description: "Certificate for tuition fees paid, used for claiming education credits.",
        essential: false,
    },
    TaxDocument {
        id: "medical",
        name: "Receipts for Medical Expenses",
        description: "Proof of eligible medical expenses such as prescriptions and dental care.",
        essential: true,
    },
    TaxDocument {
        id: "charity",
        name: "Charitable Donation Receipts",
        description: "Receipts from registered charities to claim a donation tax credit.",
        essential: true,
    },
    TaxDocument {
        id: "hbp",
        name: "Home Buyers' Plan (HBP) Receipts",
        description: "Statements showing withdrawals and repayments for the Home Buyers' Plan.",
        essential: false,
    },
    TaxDocument {
        id: "childcare",
        name: "Childcare Expenses Receipts",
        description: "Proof of payments made for childcare, used for claiming childcare expense deductions.",
        essential: false,
    },
    TaxDocument {
        id: "rental",
        name: "Rental Income and Expense Records",
        description: "Records for rental property income and expenses, used for reporting rental activity.",
        essential: false,
    },
    TaxDocument {
        id: "union",
        name: "Union or Professional Dues Receipts",
        description: "Receipts for union dues or professional fees to claim as a deduction.",
        essential: false,
    },
    TaxDocument {
        id: "t3",
        name: "T3 Slip",
        description: "Statement for trust income allocations, such as mutual funds or other investments.",
        essential: false,
    },
    TaxDocument {
        id: "noa",
        name: "Notice of Assessment (NOA)",
        description: "A summary from the CRA of your previous year's tax return assessment.",
        essential: true,
    },
    TaxDocument {
        id: "capital",
        name: "Capital Gains/Losses Statements",
        description: "Records of gains or losses from selling investments like stocks or property.",
        essential: false,
    },
    TaxDocument {
        id: "t4e",
        name: "T4E Slip (EI Benefits)",
        description: "Statement of Employment Insurance benefits received during the year.",
        essential: false,
    },
];

pub const QUESTIONS: &[Question] = &[
    Question {
        id: "employment",
        question: "Did you work for any employer(s) this year?",
        related_docs: &["t4"],
    },
    Question {
        id: "rrsp",
        question: "Did you contribute to an RRSP during the tax year?",
        related_docs: &["rrsp"],
    },
    Question {
        id: "medical",
        question: "Did you or your dependents have any significant medical or dental expenses?",
        related_docs: &["medical"],
    },
    Question {
        id: "charity",
        question: "Did you donate to any registered charities this year?",
        related_docs: &["charity"],
    },
    Question {
        id: "tuition",
        question: "Were you or your dependents enrolled in a post-secondary institution?",
        related_docs: &["t2202"],
    },
    Question {
        id: "rental",
        question: "Do you own any rental properties that generated income?",
        related_docs: &["rental"],
    },
    Question {
        id: "childcare",
        question: "Did you pay for childcare for your child(ren) while you were working or studying?",
        related_docs: &["childcare"],
    },
    Question {
        id: "investment",
        question: "Did you earn any interest, dividends, or other investment income?",
        related_docs: &["t5", "t3"],
    },
    Question {
        id: "capital",
        question: "Did you sell any stocks, mutual funds, or real estate this year?",
        related_docs: &["capital"],
    },
];

/// The two static tables backing the checklist screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    pub documents: &'static [TaxDocument],
    pub questions: &'static [Question],
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            documents: TAX_DOCUMENTS,
            questions: QUESTIONS,
        }
    }
}

impl Catalog {
    pub fn document(&self, id: &str) -> Option<&'static TaxDocument> {
        self.documents.iter().find(|doc| doc.id == id)
    }

    pub fn question(&self, id: &str) -> Option<&'static Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// `(question id, document id)` pairs whose document is missing from the catalog.
    pub fn dangling_references(&self) -> Vec<(&'static str, &'static str)> {
        self.questions
            .iter()
            .flat_map(|q| q.related_docs.iter().map(move |doc_id| (q.id, *doc_id)))
            .filter(|(_, doc_id)| self.document(doc_id).is_none())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn document_ids_are_unique() {
        let ids: HashSet<_> = TAX_DOCUMENTS.iter().map(|doc| doc.id).collect();
        assert_eq!(ids.len(), TAX_DOCUMENTS.len());
        assert_eq!(TAX_DOCUMENTS.len(), 15);
    }

    #[test]
    fn question_ids_are_unique() {
        let ids: HashSet<_> = QUESTIONS.iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), QUESTIONS.len());
    }

    #[test]
    fn builtin_catalog_has_no_dangling_references() {
        assert!(Catalog::default().dangling_references().is_empty());
    }

    #[test]
    fn dangling_references_are_reported() {
        const DOCS: &[TaxDocument] = &[TaxDocument {
            id: "t4",
            name: "T4 Slip",
            description: "",
            essential: true,
        }];
        const QS: &[Question] = &[Question {
            id: "work",
            question: "Work?",
            related_docs: &["t4", "w2", "t4"],
        }];
        let catalog = Catalog {
            documents: DOCS,
            questions: QS,
        };

        assert_eq!(catalog.dangling_references(), vec![("work", "w2")]);
    }

    #[test]
    fn lookups_by_id() {
        let catalog = Catalog::default();
        assert_eq!(catalog.document("noa").map(|doc| doc.name), Some("Notice of Assessment (NOA)"));
        assert!(catalog.document("w2").is_none());
        assert_eq!(catalog.question("investment").map(|q| q.related_docs), Some(&["t5", "t3"][..]));
    }
}
