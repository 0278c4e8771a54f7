//! Built-in paper fixtures used when no external data file is configured.

use super::{validate_batch, PaperSource, SourceResult};
use crate::model::paper::Paper;

/// Which built-in fixture set to serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureSet {
    /// Saved papers shown by the library view.
    Library,
    /// Search results shown by the home view.
    Catalogue,
}

/// In-memory source backed by static fixtures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureSource {
    set: FixtureSet,
}

impl FixtureSource {
    pub fn new(set: FixtureSet) -> Self {
        Self { set }
    }

    /// Three saved papers; two of them have summaries.
    pub fn library() -> Self {
        Self::new(FixtureSet::Library)
    }

    /// Six well-known papers with arXiv PDF links.
    pub fn catalogue() -> Self {
        Self::new(FixtureSet::Catalogue)
    }

    pub fn set(&self) -> FixtureSet {
        self.set
    }
}

impl PaperSource for FixtureSource {
    fn load_papers(&self) -> SourceResult<Vec<Paper>> {
        let papers = match self.set {
            FixtureSet::Library => library_papers(),
            FixtureSet::Catalogue => catalogue_papers(),
        };
        validate_batch(&papers)?;
        Ok(papers)
    }

    fn describe(&self) -> String {
        match self.set {
            FixtureSet::Library => "fixture:library".to_string(),
            FixtureSet::Catalogue => "fixture:catalogue".to_string(),
        }
    }
}

struct Seed<'a> {
    id: &'a str,
    title: &'a str,
    authors: &'a [&'a str],
    date: &'a str,
    abstract_text: &'a str,
    tags: &'a [&'a str],
    has_summary: bool,
    url: Option<&'a str>,
    subject: Option<&'a str>,
}

impl Seed<'_> {
    fn into_paper(self) -> Paper {
        let mut paper = Paper::with_id(self.id, self.title);
        paper.authors = self.authors.iter().map(|a| a.to_string()).collect();
        paper.date = self.date.to_string();
        paper.abstract_text = self.abstract_text.to_string();
        paper.tags = self.tags.iter().map(|t| t.to_string()).collect();
        paper.has_summary = self.has_summary;
        paper.url = self.url.map(str::to_string);
        paper.subject = self.subject.map(str::to_string);
        paper
    }
}

const TRANSFORMER_ABSTRACT: &str = "The dominant sequence transduction models are based on complex recurrent or convolutional neural networks that include an encoder and a decoder. The best performing models also connect the encoder and decoder through an attention mechanism...";
const BERT_ABSTRACT: &str = "We introduce a new language representation model called BERT, which stands for Bidirectional Encoder Representations from Transformers. Unlike recent language representation models, BERT is designed to pre-train deep bidirectional representations...";

fn library_papers() -> Vec<Paper> {
    vec![
        Seed {
            id: "1",
            title: "Attention Is All You Need",
            authors: &["Ashish Vaswani", "Noam Shazeer", "Niki Parmar"],
            date: "2023-06-12",
            abstract_text: TRANSFORMER_ABSTRACT,
            tags: &["NLP", "Transformers", "Deep Learning"],
            has_summary: true,
            url: None,
            subject: None,
        }
        .into_paper(),
        Seed {
            id: "2",
            title: "BERT: Pre-training of Deep Bidirectional Transformers for Language Understanding",
            authors: &["Jacob Devlin", "Ming-Wei Chang", "Kenton Lee"],
            date: "2022-10-11",
            abstract_text: BERT_ABSTRACT,
            tags: &["NLP", "BERT", "Language Models"],
            has_summary: true,
            url: None,
            subject: None,
        }
        .into_paper(),
        Seed {
            id: "3",
            title: "GPT-4 Technical Report",
            authors: &["OpenAI"],
            date: "2023-03-27",
            abstract_text: "We report the development of GPT-4, a large-scale, multimodal model which can accept image and text inputs and produce text outputs. While less capable than humans in many real-world scenarios, GPT-4 exhibits human-level performance on various professional and academic benchmarks...",
            tags: &["GPT", "Large Language Models", "AI"],
            has_summary: false,
            url: None,
            subject: None,
        }
        .into_paper(),
    ]
}

fn catalogue_papers() -> Vec<Paper> {
    vec![
        Seed {
            id: "1",
            title: "Attention Is All You Need",
            authors: &["Ashish Vaswani", "Noam Shazeer", "Niki Parmar", "Jakob Uszkoreit"],
            date: "2017-06-12",
            abstract_text: TRANSFORMER_ABSTRACT,
            tags: &[],
            has_summary: true,
            url: Some("https://arxiv.org/pdf/1706.03762.pdf"),
            subject: Some("Computer Science"),
        }
        .into_paper(),
        Seed {
            id: "2",
            title: "BERT: Pre-training of Deep Bidirectional Transformers for Language Understanding",
            authors: &["Jacob Devlin", "Ming-Wei Chang", "Kenton Lee", "Kristina Toutanova"],
            date: "2018-10-11",
            abstract_text: BERT_ABSTRACT,
            tags: &[],
            has_summary: false,
            url: Some("https://arxiv.org/pdf/1810.04805.pdf"),
            subject: Some("Computer Science"),
        }
        .into_paper(),
        Seed {
            id: "3",
            title: "GPT-3: Language Models are Few-Shot Learners",
            authors: &["Tom B. Brown", "Benjamin Mann", "Nick Ryder", "Melanie Subbiah"],
            date: "2020-05-28",
            abstract_text: "Recent work has demonstrated substantial gains on many NLP tasks and benchmarks by pre-training on a large corpus of text followed by fine-tuning on a specific task. While typically task-agnostic in architecture, this method still requires task-specific fine-tuning datasets...",
            tags: &[],
            has_summary: false,
            url: Some("https://arxiv.org/pdf/2005.14165.pdf"),
            subject: Some("Computer Science"),
        }
        .into_paper(),
        Seed {
            id: "4",
            title: "Deep Residual Learning for Image Recognition",
            authors: &["Kaiming He", "Xiangyu Zhang", "Shaoqing Ren", "Jian Sun"],
            date: "2015-12-10",
            abstract_text: "Deeper neural networks are more difficult to train. We present a residual learning framework to ease the training of networks that are substantially deeper than those used previously. We explicitly reformulate the layers as learning residual functions...",
            tags: &[],
            has_summary: false,
            url: Some("https://arxiv.org/pdf/1512.03385.pdf"),
            subject: Some("Computer Science"),
        }
        .into_paper(),
        Seed {
            id: "5",
            title: "Generative Adversarial Networks",
            authors: &["Ian J. Goodfellow", "Jean Pouget-Abadie", "Mehdi Mirza", "Bing Xu"],
            date: "2014-06-10",
            abstract_text: "We propose a new framework for estimating generative models via an adversarial process, in which we simultaneously train two models: a generative model G that captures the data distribution, and a discriminative model D that estimates the probability...",
            tags: &[],
            has_summary: false,
            url: Some("https://arxiv.org/pdf/1406.2661.pdf"),
            subject: Some("Computer Science"),
        }
        .into_paper(),
        Seed {
            id: "6",
            title: "Transformer-XL: Attentive Language Models Beyond a Fixed-Length Context",
            authors: &["Zihang Dai", "Zhilin Yang", "Yiming Yang", "Jaime Carbonell"],
            date: "2019-01-09",
            abstract_text: "Transformers have a potential of learning longer-term dependency, but are limited by a fixed-length context in the setting of language modeling. We propose a novel neural architecture Transformer-XL that enables learning dependency beyond a fixed length...",
            tags: &[],
            has_summary: false,
            url: Some("https://arxiv.org/pdf/1901.02860.pdf"),
            subject: Some("Computer Science"),
        }
        .into_paper(),
    ]
}
