//! Progressive-treatment annotation for failure analysis.

use etchant_core::{ApplicationContext, EtchantMatch, SEQUENCE_LENGTH};

/// Number the leading matches as successive treatment steps.
///
/// Applies only when `context` asks for sequencing and more than one match
/// was ranked. Order is never changed.
pub fn assign_sequence(matches: &mut [EtchantMatch<'_>], context: Option<ApplicationContext>) {
    if !context.is_some_and(ApplicationContext::triggers_sequencing) || matches.len() < 2 {
        return;
    }
    for (step, entry) in (1_u8..).zip(matches.iter_mut().take(SEQUENCE_LENGTH)) {
        entry.recommended_sequence = Some(step);
    }
}

/// Sequenced matches in step order.
///
/// # Examples
/// ```
/// use etchant_core::{ApplicationContext, Etchant, EtchantMatch, UniqueList};
/// use etchant_matcher::{assign_sequence, progressive_plan};
///
/// let a = Etchant::new(Some("a"), None, "A").unwrap();
/// let b = Etchant::new(Some("b"), None, "B").unwrap();
/// let mut matches = vec![
///     EtchantMatch::new(&a, 200, vec![], UniqueList::new(), UniqueList::new()),
///     EtchantMatch::new(&b, 100, vec![], UniqueList::new(), UniqueList::new()),
/// ];
/// assign_sequence(&mut matches, Some(ApplicationContext::FailureAnalysis));
/// let plan = progressive_plan(&matches);
/// assert_eq!(plan.len(), 2);
/// assert_eq!(plan[0].recommended_sequence, Some(1));
/// ```
#[must_use]
pub fn progressive_plan<'m, 'a>(matches: &'m [EtchantMatch<'a>]) -> Vec<&'m EtchantMatch<'a>> {
    let mut plan: Vec<_> = matches
        .iter()
        .filter(|entry| entry.recommended_sequence.is_some())
        .collect();
    plan.sort_by_key(|entry| entry.recommended_sequence);
    plan
}
