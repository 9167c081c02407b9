use super::*;
use crate::providers::ScriptedChatModel;

#[tokio::test]
async fn proximity_reads_first_number() {
    let agent = ProximityAgent::new(Arc::new(ScriptedChatModel::fixed(
        "80 - aligned with the goal",
    )));
    let h = Hypothesis::new("h", "r", 0);
    assert_eq!(agent.proximity(&ResearchGoal::new("g"), &h).await.expect("score"), 80);
}

#[tokio::test]
async fn proximity_defaults_when_no_number() {
    let agent = ProximityAgent::new(Arc::new(ScriptedChatModel::fixed("quite close")));
    let h = Hypothesis::new("h", "r", 0);
    assert_eq!(
        agent.proximity(&ResearchGoal::new("g"), &h).await.expect("score"),
        parse::DEFAULT_PROXIMITY
    );
}
