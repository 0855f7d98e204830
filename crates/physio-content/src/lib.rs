//! Static content for the Home Physio landing page.
//!
//! Everything here is read-only and built once per process. The only
//! behavior is lookup: services by key, FAQ entries by index.

mod faq;
mod practice;
mod sections;
mod services;

pub use faq::*;
pub use practice::*;
pub use sections::*;
pub use services::*;

use std::sync::OnceLock;

/// All content rendered on the landing page.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub practice: PracticeInfo,
    pub services: &'static ServiceCatalog,
    pub conditions: Vec<ConditionCategory>,
    pub approach: Vec<ApproachCard>,
    pub process: Vec<ProcessStep>,
    pub faq: FaqList,
}

impl PageContent {
    /// The site's content, built on first use.
    pub fn standard() -> &'static PageContent {
        static CONTENT: OnceLock<PageContent> = OnceLock::new();
        CONTENT.get_or_init(|| PageContent {
            practice: PracticeInfo::default(),
            services: ServiceCatalog::standard(),
            conditions: ConditionCategory::standard(),
            approach: ApproachCard::standard(),
            process: ProcessStep::standard(),
            faq: FaqList::standard(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_content_is_shared() {
        let first = PageContent::standard();
        let second = PageContent::standard();
        assert!(std::ptr::eq(first, second));
        assert!(std::ptr::eq(first.services, ServiceCatalog::standard()));
    }

    #[test]
    fn test_standard_content_complete() {
        let content = PageContent::standard();
        assert_eq!(content.services.len(), 6);
        assert_eq!(content.conditions.len(), 6);
        assert_eq!(content.approach.len(), 4);
        assert_eq!(content.process.len(), 4);
        assert_eq!(content.faq.len(), 7);
        assert_eq!(content.practice.practitioner, "Ismail Aram");
    }
}
