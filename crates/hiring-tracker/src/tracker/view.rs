use std::fmt;
use std::ops::Index;
use std::sync::Arc;

use super::domain::{Applicant, Position};
use super::fields::{ApplicationStatus, Title};

/// Shared, cloneable element filter.
pub type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// The single active filter over one store.
///
/// Projections are recomputed from the backing store on every call, so a
/// consumer re-queries after each mutation instead of being notified.
pub struct FilteredView<T> {
    predicate: Option<Predicate<T>>,
}

impl<T> FilteredView<T> {
    pub fn new() -> Self {
        Self { predicate: None }
    }

    /// Replace the active filter.
    pub fn set_predicate<F>(&mut self, predicate: F)
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.predicate = Some(Arc::new(predicate));
    }

    pub fn set_shared_predicate(&mut self, predicate: Predicate<T>) {
        self.predicate = Some(predicate);
    }

    /// Back to showing every element.
    pub fn show_all(&mut self) {
        self.predicate = None;
    }

    pub fn is_filtered(&self) -> bool {
        self.predicate.is_some()
    }

    pub fn matches(&self, item: &T) -> bool {
        self.predicate
            .as_ref()
            .map_or(true, |predicate| predicate(item))
    }

    /// Stable filter over `source`, preserving its order.
    pub fn project<'a>(&self, source: &'a [T]) -> Projection<'a, T> {
        Projection {
            items: source.iter().filter(|item| self.matches(item)).collect(),
        }
    }
}

impl<T> Default for FilteredView<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for FilteredView<T> {
    fn clone(&self) -> Self {
        Self {
            predicate: self.predicate.clone(),
        }
    }
}

impl<T> fmt::Debug for FilteredView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilteredView")
            .field("filtered", &self.is_filtered())
            .finish()
    }
}

/// Read-only visible subsequence of a store. It hands out shared references
/// only; every change goes through the owning store.
#[derive(Debug)]
pub struct Projection<'a, T> {
    items: Vec<&'a T>,
}

impl<'a, T> Projection<'a, T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.items.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.items.iter().copied()
    }

    /// Owned copies of the visible elements, for callers that outlive the store borrow.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.iter().map(|item| (*item).clone()).collect()
    }
}

impl<'a, T> Index<usize> for Projection<'a, T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.items[index]
    }
}

impl<'a, T> IntoIterator for Projection<'a, T> {
    type Item = &'a T;
    type IntoIter = std::vec::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

fn contains_word_ignore_case(text: &str, keyword: &str) -> bool {
    let keyword = keyword.to_lowercase();
    text.split_whitespace().any(|word| word.to_lowercase() == keyword)
}

fn normalized_keywords<I, S>(keywords: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    keywords
        .into_iter()
        .map(|keyword| keyword.as_ref().trim().to_owned())
        .filter(|keyword| !keyword.is_empty())
        .collect()
}

/// Applicants whose name contains any of `keywords` as a whole word, ignoring case.
pub fn applicant_name_contains_keywords<I, S>(keywords: I) -> Predicate<Applicant>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let keywords = normalized_keywords(keywords);
    Arc::new(move |applicant: &Applicant| {
        keywords
            .iter()
            .any(|keyword| contains_word_ignore_case(applicant.name.as_str(), keyword))
    })
}

/// Positions whose title contains any of `keywords` as a whole word, ignoring case.
pub fn position_title_contains_keywords<I, S>(keywords: I) -> Predicate<Position>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let keywords = normalized_keywords(keywords);
    Arc::new(move |position: &Position| {
        keywords
            .iter()
            .any(|keyword| contains_word_ignore_case(position.title.as_str(), keyword))
    })
}

pub fn applicant_has_status(status: ApplicationStatus) -> Predicate<Applicant> {
    Arc::new(move |applicant: &Applicant| applicant.status() == status)
}

pub fn applicant_applying_to(title: Title) -> Predicate<Applicant> {
    Arc::new(move |applicant: &Applicant| applicant.is_applying_to_title(&title))
}
