use serde::{Deserialize, Serialize};

use super::types::Subject;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityTopic {
    pub subject_id: String,
    pub subject_name: String,
    pub topic_id: String,
    pub topic_name: String,
    pub mastery: u8,
}

/// Topic to suggest first on the dashboard.
///
/// Walks topics in store order with a running minimum starting at 100. A topic
/// takes over when it is flagged priority or its mastery is below the running
/// minimum, and the minimum becomes its mastery. A later flagged topic
/// therefore wins over an earlier one even with higher mastery.
pub fn priority_topic(subjects: &[Subject]) -> Option<PriorityTopic> {
    let mut min_mastery = 100u8;
    let mut pick = None;

    for subject in subjects {
        for topic in &subject.topics {
            if topic.priority || topic.mastery < min_mastery {
                min_mastery = topic.mastery;
                pick = Some(PriorityTopic {
                    subject_id: subject.id.clone(),
                    subject_name: subject.name.clone(),
                    topic_id: topic.id.clone(),
                    topic_name: topic.name.clone(),
                    mastery: topic.mastery,
                });
            }
        }
    }

    pick
}
