//! English module table.

use super::{Dataset, IconName, Metric, ModuleId, ModuleRecord, RadarPoint};

pub(super) static MODULES: [ModuleRecord; 5] = [
    ModuleRecord {
        id: ModuleId::Overview,
        title: "System Overview",
        icon: IconName::Dashboard,
        summary: "High-level performance summary of the Bio-Agent across key dimensions compared to baseline.",
        metrics: &[],
        datasets: &[],
        radar: Some(&[
            RadarPoint { subject: "Retrieval Accuracy", agent: 92, baseline: 65, full_mark: 100 },
            RadarPoint { subject: "Clinical Reasoning", agent: 85, baseline: 55, full_mark: 100 },
            RadarPoint { subject: "Tool Success", agent: 78, baseline: 40, full_mark: 100 },
            RadarPoint { subject: "Safety/Factuality", agent: 95, baseline: 60, full_mark: 100 },
            RadarPoint { subject: "Context Length", agent: 88, baseline: 50, full_mark: 100 },
            RadarPoint { subject: "Bio-Knowledge", agent: 90, baseline: 60, full_mark: 100 },
        ]),
    },
    ModuleRecord {
        id: ModuleId::Rag,
        title: "RAG Evaluation",
        icon: IconName::Database,
        summary: "Evaluates the retrieval accuracy of biological entities and the faithfulness of the generation based on retrieved contexts.",
        metrics: &[
            Metric {
                name: "Context Recall",
                description: "Top-K retrieved documents must contain the Golden Truth.",
                tool: Some("Custom Python"),
                formula: "def context_recall(retrieved, ground_truth): \n    # Check intersection of retrieved content and ground truth\n    return len(set(retrieved) & set(ground_truth)) / len(ground_truth)",
            },
            Metric {
                name: "Faithfulness",
                description: "Ensures the generated claim can be derived solely from the context.",
                tool: Some("Ragas"),
                formula: "from ragas import faithfulness \n# Calculate faithfulness score based on answer and context\nscore = faithfulness.score(answer, context)",
            },
        ],
        datasets: &[
            Dataset {
                name: "BioASQ (Task B)",
                tags: &["Semantic Indexing", "QA"],
                kpis: &["MAP@K", "Recall@K"],
                description: "The \"Olympics\" of biomedical retrieval. Task B contains real questions, triplets, and exact answers based on PubMed abstracts.",
            },
            Dataset {
                name: "SciFact",
                tags: &["Claim Verification", "Evidence"],
                kpis: &["Label Accuracy"],
                description: "A dataset for scientific claim verification. Requires verifying if a generated claim is supported by evidence.",
            },
            Dataset {
                name: "TREC-COVID",
                tags: &["IR", "Domain Specific"],
                kpis: &["NDCG@10"],
                description: "Retrieval benchmark specifically for public health emergencies. Tests retrieval capabilities on rapidly growing corpora.",
            },
            Dataset {
                name: "PubMedQA",
                tags: &["Context Reasoning"],
                kpis: &["Accuracy"],
                description: "Requires the model to answer Yes/No/Maybe based on abstract content, testing context understanding.",
            },
        ],
        radar: None,
    },
    ModuleRecord {
        id: ModuleId::Qa,
        title: "QA & Reasoning",
        icon: IconName::MessageSquare,
        summary: "Assesses the agent's ability to answer domain-specific questions correctly, including multi-hop reasoning.",
        metrics: &[
            Metric {
                name: "Exact Match",
                description: "Strict matching test for Bio-Entities.",
                tool: Some("Python String Match"),
                formula: "def exact_match(prediction, truth): \n    # Strict string comparison after stripping whitespace\n    return 1 if prediction.strip() == truth.strip() else 0",
            },
            Metric {
                name: "Bio-F1 Score",
                description: "Vocabulary-level overlap degree.",
                tool: Some("sklearn"),
                formula: "from sklearn.metrics import f1_score \n# Calculate F1 score based on precision and recall of tokens\nscore = 2 * (p * r) / (p + r)",
            },
        ],
        datasets: &[
            Dataset {
                name: "MedQA (USMLE)",
                tags: &["Clinical Knowledge"],
                kpis: &["Accuracy"],
                description: "Questions from the US Medical Licensing Examination, evaluating if AI possesses human doctor-level knowledge.",
            },
            Dataset {
                name: "GeneTuring",
                tags: &["Genomics"],
                kpis: &["Exact Match"],
                description: "Genomics-specific QA library (including gene locations, aliases) to test molecular biology details.",
            },
            Dataset {
                name: "MedMCQA",
                tags: &["Broad Coverage"],
                kpis: &["Accuracy"],
                description: "Covers 194k questions from Indian medical entrance exams, suitable for stability testing.",
            },
            Dataset {
                name: "MMLU-Med",
                tags: &["Zero-shot"],
                kpis: &["Zero-shot Acc"],
                description: "Used to evaluate the general biological common sense level of the model without fine-tuning.",
            },
        ],
        radar: None,
    },
    ModuleRecord {
        id: ModuleId::ToolCalling,
        title: "Tool Use / Agents",
        icon: IconName::Wrench,
        summary: "Evaluates if the agent calls the correct external APIs (e.g., NCBI, BLAST) with correct parameters.",
        metrics: &[
            Metric {
                name: "Tool Success",
                description: "Successful call and compliance with Schema.",
                tool: Some("Schema Validator"),
                formula: "def success(outputs): \n    # Calculate ratio of successful outputs to total\n    return len([o for o in outputs if o.ok]) / total",
            },
            Metric {
                name: "Arg Hallucination",
                description: "Checks if parameters are fabricated.",
                tool: Some("Validation Logic"),
                formula: "def check_args(schema, args): \n    # Return 1 minus the error rate of invalid arguments\n    return 1 - (invalid / total)",
            },
        ],
        datasets: &[
            Dataset {
                name: "ChemCrow Bench",
                tags: &["Chemistry Tools"],
                kpis: &["Success Rate"],
                description: "Authoritative benchmark for chemical agents. Tests ability to plan molecular synthesis and predict properties.",
            },
            Dataset {
                name: "SciBench",
                tags: &["Calculation"],
                kpis: &["Calc Accuracy"],
                description: "Focuses on complex scientific calculation problems, such as concentration calculations and kinetic equation solving.",
            },
            Dataset {
                name: "Mol-Instructions",
                tags: &["Protein Design"],
                kpis: &["Validity"],
                description: "Contains instructional tasks regarding biomolecules, testing instruction following and tool execution.",
            },
            Dataset {
                name: "ToolBench-Bio",
                tags: &["API Calling"],
                kpis: &["Pass Rate"],
                description: "General bio-related API call scenarios, testing parameter filling and error handling.",
            },
        ],
        radar: None,
    },
    ModuleRecord {
        id: ModuleId::DeepResearch,
        title: "Deep Research",
        icon: IconName::Microscope,
        summary: "Evaluates the ability to synthesize long-form reports, cite sources accurately, and cover topics comprehensively.",
        metrics: &[
            Metric {
                name: "Citation Precision",
                description: "Whether the citation supports the argument.",
                tool: Some("Custom Eval"),
                formula: "def cite_prec(report, sources): \n    # Calculate precision of citations supporting the report claims\n    return hits / len(report.citations)",
            },
            Metric {
                name: "Factuality",
                description: "NLI model to judge authenticity.",
                tool: Some("RoBERTa-MNLI"),
                formula: "from transformers import pipeline\n# Use NLI pipeline to check entailment\npipe = pipeline(\"nli\", model=\"roberta-mnli\")",
            },
        ],
        datasets: &[
            Dataset {
                name: "LitQA (LitQA2)",
                tags: &["Leak-proof", "Multi-step Retrieval"],
                kpis: &["Accuracy", "Evidence Retrieval"],
                description: "Developed by LabWorm. A leak-proof benchmark based on recent literature, preventing training data contamination. Requires expert-level multi-step reasoning and synthesis.",
            },
            Dataset {
                name: "Cochrane Reviews",
                tags: &["Systematic Review"],
                kpis: &["ROUGE-L"],
                description: "Highest standard for evidence-based medicine. Tests ability to summarize conclusions from multiple papers.",
            },
            Dataset {
                name: "Qasper",
                tags: &["Evidence Extraction"],
                kpis: &["Evidence F1"],
                description: "Focuses on answering questions from full academic papers and locating evidence fragments.",
            },
            Dataset {
                name: "LongHealth",
                tags: &["Long Context"],
                kpis: &["Retrieval Acc"],
                description: "QA for ultra-long clinical records and literature, testing long-context forgetting issues.",
            },
            Dataset {
                name: "MS^2",
                tags: &["Summarization"],
                kpis: &["BERTScore"],
                description: "Medical domain multi-document summarization task, corresponding to core output of Research Agents.",
            },
        ],
        radar: None,
    },
];
