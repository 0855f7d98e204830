//! Frequently asked questions.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    pub fn new(question: &str, answer: &str) -> Self {
        Self {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }
}

/// Ordered FAQ entries, addressed by zero-based index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaqList {
    entries: Vec<FaqEntry>,
}

impl FaqList {
    pub fn new(entries: Vec<FaqEntry>) -> Self {
        Self { entries }
    }

    pub fn standard() -> Self {
        Self::new(vec![
            FaqEntry::new(
                "Do I need a GP referral?",
                "No, you don't need a GP referral to access our home physiotherapy services. However, we're happy to liaise with your GP and other healthcare professionals involved in your care to ensure a coordinated approach.",
            ),
            FaqEntry::new(
                "How long are treatment sessions?",
                "Initial assessments typically last 60 minutes, allowing comprehensive evaluation of your condition. Follow-up treatment sessions are usually 45-60 minutes, depending on your individual needs and treatment plan.",
            ),
            FaqEntry::new(
                "How many sessions will I need?",
                "This varies depending on your condition, goals, and progress. Some patients benefit from intensive short-term treatment (6-8 weeks), while others require longer-term management. We'll discuss this during your initial assessment and review progress regularly.",
            ),
            FaqEntry::new(
                "What are your fees?",
                "Initial assessment: £75 | Standard session (45-60 mins): £65 | We offer package discounts for block bookings. Payment can be made by cash or bank transfer.",
            ),
            FaqEntry::new(
                "Which areas do you cover?",
                "We provide home visits across London and the Home Counties, with coverage extending to surrounding areas. Please contact us to confirm we can visit your location - we're often able to accommodate requests outside our standard coverage area.",
            ),
            FaqEntry::new(
                "What should I prepare for my first visit?",
                "Please have any relevant medical reports, imaging results, or medication lists available. Wear comfortable clothing that allows movement. Ensure there's adequate space for assessment and exercises. Having a family member or carer present can be helpful for support and education.",
            ),
            FaqEntry::new(
                "Are you insured and registered?",
                "Yes, I am fully registered with the Health and Care Professions Council (HCPC) and am a Chartered Member of the Chartered Society of Physiotherapy (CSP). I hold full Professional Liability Insurance (PLI) and have an enhanced DBS check.",
            ),
        ])
    }

    pub fn get(&self, index: usize) -> Option<&FaqEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FaqEntry> {
        self.entries.iter()
    }
}
