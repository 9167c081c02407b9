use super::*;
use crate::providers::ScriptedChatModel;

#[tokio::test]
async fn variants_are_parented_one_generation_later() {
    let model = Arc::new(ScriptedChatModel::new(|call| {
        assert!(call.user.ends_with("Tournament patterns: p1; p2"));
        Ok("- sharper variant\n- cheaper variant\n- ignored third".to_string())
    }));
    let agent = EvolutionAgent::new(model);
    let mut base = Hypothesis::new("base", "base rationale", 1);
    base.score = 1234.0;

    let variants = agent
        .evolve(&base, &["p1".to_string(), "p2".to_string()])
        .await
        .expect("variants");

    assert_eq!(variants.len(), 2);
    for v in &variants {
        assert_eq!(v.parent_id.as_deref(), Some(base.id.as_str()));
        assert_eq!(v.generation, 2);
        assert_eq!(v.rationale, "base rationale");
        assert_eq!(v.score, 0.0);
        assert_ne!(v.id, base.id);
    }
    assert_eq!(variants[0].text, "sharper variant");
}

#[tokio::test]
async fn empty_reply_yields_no_variants() {
    let agent = EvolutionAgent::new(Arc::new(ScriptedChatModel::fixed("\n\n")));
    let base = Hypothesis::new("base", "r", 0);
    assert!(agent.evolve(&base, &[]).await.expect("variants").is_empty());
}
