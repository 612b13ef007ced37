/// A sample text and the terms its glossary translation should contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub text: String,
    pub expected_terms: Vec<String>,
    /// Expected terms that should stay in the source language.
    pub keep_original: Vec<String>,
    pub description: String,
}

impl TestCase {
    pub fn new(text: &str, expected: &[&str], keep_original: &[&str], description: &str) -> Self {
        Self {
            text: text.to_string(),
            expected_terms: expected.iter().map(|s| (*s).to_string()).collect(),
            keep_original: keep_original.iter().map(|s| (*s).to_string()).collect(),
            description: description.to_string(),
        }
    }

    /// A free-text case with no expectations, used by the interactive mode.
    pub fn ad_hoc(text: &str) -> Self {
        Self::new(text, &[], &[], "ad hoc")
    }
}

/// Cases exercising the built-in English → Chinese term set.
pub fn preset_cases() -> Vec<TestCase> {
    vec![
        TestCase::new(
            "LLM has revolutionized natural language processing.",
            &["LLM"],
            &["LLM"],
            "LLM stays in English",
        ),
        TestCase::new(
            "Reinforcement learning is used in embodied AI systems.",
            &["强化学习", "具身智能"],
            &[],
            "Several translated terms",
        ),
        TestCase::new(
            "The agent learns a policy through reward signals from the environment.",
            &["agent", "策略", "奖励", "环境"],
            &["agent"],
            "Mixed: agent kept, others translated",
        ),
        TestCase::new(
            "Imitation learning uses demonstration trajectories for training.",
            &["模仿学习", "演示", "轨迹"],
            &[],
            "Imitation learning vocabulary",
        ),
        TestCase::new(
            "The MDP framework includes states, actions, and rewards.",
            &["马尔可夫决策过程", "状态", "动作", "奖励"],
            &[],
            "MDP vocabulary",
        ),
        TestCase::new(
            "Large language models like GPT can perform various NLP tasks.",
            &["大语言模型", "GPT", "NLP"],
            &["GPT", "NLP"],
            "Mixed: abbreviations kept",
        ),
    ]
}
