//! The built-in RAG landscape catalog.
//!
//! Covers the RAG pipeline, LLM providers, orchestration frameworks, agent
//! roles, fine-tuning and prompting techniques, and the operational skills
//! around them (guardrails, tracing, routing, caching).

use log::debug;

use ragmap_core::{catalog::Catalog, color::Color};

// Color groups
const RAG_PIPELINE: &str = "#e6e6ff";
const RAG: &str = "#b3ffb3";
const LLM_PROVIDER: &str = "#ffd699";
const FRAMEWORK: &str = "#99c2ff";
const AGENT: &str = "#ffe6f2";
const MEMORY: &str = "#e8d1ff";
const TOOL_USE: &str = "#d9d9d9";
const PROMPTING: &str = "#fff0b3";
const SAFETY: &str = "#ffdfdf";
const OPERATIONS: &str = "#c2f0f0";

const NODES: &[&str] = &[
    // RAG pipeline
    "Chunking",
    "Embeddings",
    "Indexing",
    "VectorDB",
    "Ranking",
    "RAG",
    "LLM",
    "OpenAI",
    // Frameworks and orchestration
    "LangChain",
    "LangGraph",
    // Agents
    "Planner",
    "Executor",
    "Evaluator",
    "Memory",
    "ToolUse",
    // Fine-tuning and prompting
    "Fine-tuning",
    "Prompt engineering",
    "Chain-of-Thought",
    "Zero-Shot",
    "Few-Shot",
    // Skills
    "Prompt templates",
    "Sampling (temperature/top-p)",
    "Guardrails",
    "Human-in-the-loop",
    "LangSmith (Eval/Tracing)",
    "Model routing",
    "Caching",
];

const EDGES: &[(&str, &str)] = &[
    // RAG pipeline
    ("Chunking", "Embeddings"),
    ("Embeddings", "Indexing"),
    ("Indexing", "VectorDB"),
    ("VectorDB", "RAG"),
    ("Ranking", "RAG"),
    ("RAG", "LLM"),
    ("LLM", "OpenAI"),
    // Orchestration
    ("LangChain", "LangGraph"),
    ("LangChain", "RAG"),
    ("LangChain", "LLM"),
    // Control graph
    ("LangGraph", "Planner"),
    ("LangGraph", "Executor"),
    ("LangGraph", "Evaluator"),
    ("LangGraph", "Memory"),
    // Agents use tools and retrieval
    ("Planner", "ToolUse"),
    ("Planner", "RAG"),
    ("Executor", "ToolUse"),
    ("Executor", "RAG"),
    ("Evaluator", "LangGraph"),
    ("Memory", "RAG"),
    ("Memory", "LangGraph"),
    // Fine-tuning and prompting
    ("Fine-tuning", "LLM"),
    ("Prompt engineering", "Chain-of-Thought"),
    ("Prompt engineering", "Zero-Shot"),
    ("Prompt engineering", "Few-Shot"),
    ("Prompt engineering", "RAG"),
    ("Prompt engineering", "LLM"),
    // Skills
    ("Prompt engineering", "Prompt templates"),
    ("Prompt engineering", "Sampling (temperature/top-p)"),
    ("Prompt templates", "LLM"),
    ("Sampling (temperature/top-p)", "LLM"),
    ("Guardrails", "LLM"),       // input/output filters
    ("Guardrails", "Evaluator"), // validation rules
    ("Human-in-the-loop", "Evaluator"),
    ("LangSmith (Eval/Tracing)", "Evaluator"),
    ("LangSmith (Eval/Tracing)", "LangChain"),
    ("LangSmith (Eval/Tracing)", "LangGraph"),
    ("LangGraph", "Model routing"),
    ("Model routing", "LLM"),
    ("Model routing", "OpenAI"),
    ("Caching", "RAG"),
    ("Caching", "LLM"),
];

const TOOLTIPS: &[(&str, &str)] = &[
    ("Chunking", "Dělení dokumentů na pasáže pro lepší retrieval."),
    ("Embeddings", "Vektorové reprezentace textu pro podobnostní vyhledávání."),
    ("Indexing", "Index nad embeddingy (např. HNSW/IVF)."),
    ("VectorDB", "Úložiště vektorů + nearest-neighbor search."),
    ("Ranking", "Re-ranking pasáží (např. cross-encoder)."),
    ("RAG", "Retrieval-Augmented Generation: dohledá kontext a předá ho LLM."),
    ("LLM", "Velký jazykový model – generace odpovědí."),
    ("OpenAI", "Příklad poskytovatele LLM/API."),
    ("LangChain", "Framework pro chains/agents, paměť a nástroje."),
    ("LangGraph", "Stavový graf/orchestrátor: řízení toku, větvení, retry."),
    ("Planner", "Plánuje kroky (plan-and-execute)."),
    ("Executor", "Provádí kroky/nástroje dle plánu."),
    ("Evaluator", "Hodnotí kvalitu/validuje (guardrails, evaly)."),
    ("Memory", "Paměť (dlouhodobá/konverzační/vektorová)."),
    ("ToolUse", "Volání nástrojů/API (search, DB, kód...)."),
    ("Fine-tuning", "Učení/ladění modelu na vlastních datech."),
    ("Prompt engineering", "Tvorba promptů a šablon pro řízení LLM."),
    ("Chain-of-Thought", "Technika, která vede k postupnému uvažování."),
    ("Zero-Shot", "Bez příkladů – model generuje rovnou."),
    ("Few-Shot", "Pár příkladů v promptu pro lepší přesnost."),
    ("Prompt templates", "Šablony promptů (Jinja/YAML/parametrizace)."),
    ("Sampling (temperature/top-p)", "Parametry kreativity a rozmanitosti."),
    ("Guardrails", "Bezpečnost/validace výstupu (policy, filtry, schémata)."),
    ("Human-in-the-loop", "Člověk schvaluje/koriguje kroky či odpovědi."),
    ("LangSmith (Eval/Tracing)", "Tracing, evaluace a experimenty s LLM pipeline."),
    ("Model routing", "Dynamická volba modelu podle úlohy/nákladů."),
    ("Caching", "Ukládání výsledků pro nižší latenci a cenu."),
];

const COLORS: &[(&str, &str)] = &[
    ("Chunking", RAG_PIPELINE),
    ("Embeddings", RAG_PIPELINE),
    ("Indexing", RAG_PIPELINE),
    ("VectorDB", RAG_PIPELINE),
    ("Ranking", RAG_PIPELINE),
    ("RAG", RAG),
    ("LLM", LLM_PROVIDER),
    ("OpenAI", LLM_PROVIDER),
    ("LangChain", FRAMEWORK),
    ("LangGraph", FRAMEWORK),
    ("Planner", AGENT),
    ("Executor", AGENT),
    ("Evaluator", AGENT),
    ("Memory", MEMORY),
    ("ToolUse", TOOL_USE),
    ("Fine-tuning", PROMPTING),
    ("Prompt engineering", PROMPTING),
    ("Chain-of-Thought", PROMPTING),
    ("Zero-Shot", PROMPTING),
    ("Few-Shot", PROMPTING),
    ("Prompt templates", PROMPTING),
    ("Sampling (temperature/top-p)", PROMPTING),
    ("Guardrails", SAFETY),
    ("Human-in-the-loop", SAFETY),
    ("LangSmith (Eval/Tracing)", OPERATIONS),
    ("Model routing", OPERATIONS),
    ("Caching", OPERATIONS),
];

/// Returns the built-in RAG landscape catalog.
///
/// # Examples
///
/// ```
/// # use ragmap_core::identifier::Id;
/// let catalog = ragmap_catalog::builtin();
/// assert!(catalog.is_declared(Id::new("RAG")));
/// assert_eq!(catalog.color(Id::new("RAG")).to_hex(), "#b3ffb3");
/// ```
pub fn builtin() -> Catalog {
    let mut builder = Catalog::builder();

    for &node in NODES {
        builder = builder.node(node);
    }
    for &(source, target) in EDGES {
        builder = builder.edge(source, target);
    }
    for &(node, text) in TOOLTIPS {
        builder = builder.tooltip(node, text);
    }
    for &(node, color) in COLORS {
        builder = builder.color(
            node,
            Color::new(color).expect("built-in palette colors are valid"),
        );
    }

    let catalog = builder.build();
    debug!(
        nodes_count = catalog.nodes().len(),
        edges_count = catalog.edges().len();
        "Built-in catalog assembled"
    );
    catalog
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use ragmap_core::{catalog::DEFAULT_FILL, identifier::Id};

    use super::*;

    #[test]
    fn test_builtin_counts() {
        let catalog = builtin();
        assert_eq!(catalog.nodes().len(), 27);
        assert_eq!(catalog.edges().len(), 42);
    }

    #[test]
    fn test_builtin_edges_reference_declared_nodes() {
        let catalog = builtin();
        for edge in catalog.edges() {
            assert!(
                catalog.is_declared(edge.source()),
                "undeclared source {}",
                edge.source()
            );
            assert!(
                catalog.is_declared(edge.target()),
                "undeclared target {}",
                edge.target()
            );
        }
    }

    #[test]
    fn test_every_builtin_node_has_tooltip_and_color() {
        let declared: HashSet<&str> = NODES.iter().copied().collect();
        let with_tooltip: HashSet<&str> = TOOLTIPS.iter().map(|(n, _)| *n).collect();
        let with_color: HashSet<&str> = COLORS.iter().map(|(n, _)| *n).collect();

        assert_eq!(declared, with_tooltip);
        assert_eq!(declared, with_color);
    }

    #[test]
    fn test_builtin_palette_groups() {
        let catalog = builtin();
        assert_eq!(catalog.color(Id::new("VectorDB")).to_hex(), RAG_PIPELINE);
        assert_eq!(catalog.color(Id::new("LangGraph")).to_hex(), FRAMEWORK);
        assert_eq!(catalog.color(Id::new("Caching")).to_hex(), OPERATIONS);
        // ToolUse shares the default gray.
        assert_eq!(catalog.color(Id::new("ToolUse")).to_hex(), DEFAULT_FILL);
    }

    #[test]
    fn test_builtin_tooltips() {
        let catalog = builtin();
        assert_eq!(
            catalog.tooltip(Id::new("Indexing")),
            "Index nad embeddingy (např. HNSW/IVF)."
        );
        assert_eq!(catalog.label(Id::new("Few-Shot")), "Few-Shot");
    }
}
