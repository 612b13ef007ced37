/// Academic AI vocabulary, English → Simplified Chinese.
///
/// Abbreviations and proper nouns map to themselves so DeepL leaves them
/// in English.
pub const BUILTIN_TERMS: &[(&str, &str)] = &[
    // Kept in English
    ("LLM", "LLM"),
    ("LLMs", "LLM"),
    ("GPT", "GPT"),
    ("API", "API"),
    ("NLP", "NLP"),
    // Translated
    ("large language model", "大语言模型"),
    ("large language models", "大语言模型"),
    ("reinforcement learning", "强化学习"),
    ("embodied AI", "具身智能"),
    ("embodied decision making", "具身决策"),
    ("policy", "策略"),
    ("reward", "奖励"),
    ("agent", "agent"),
    ("environment", "环境"),
    ("state", "状态"),
    ("action", "动作"),
    ("Markov Decision Process", "马尔可夫决策过程"),
    ("MDP", "马尔可夫决策过程"),
    ("Q-learning", "Q学习"),
    ("actor-critic", "演员-评论家"),
    ("imitation learning", "模仿学习"),
    ("demonstration", "演示"),
    ("trajectory", "轨迹"),
    ("visuomotor control", "视觉-运动控制"),
    ("multimodal", "多模态"),
];
