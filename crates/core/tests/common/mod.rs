//! Test doubles for the model backend.

use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use tubeseo_core::{
    GenerationRequest, Secret, ServiceError, TextGenerator, Tone, VideoType,
};

/// How the stub answers.
pub enum StubBehavior {
    Reply(String),
    Fail(u16),
}

/// A deterministic stand-in for the hosted model. Records every prompt.
pub struct StubGenerator {
    behavior: StubBehavior,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl StubGenerator {
    pub fn replying(text: &str) -> Self {
        Self::new(StubBehavior::Reply(text.to_string()))
    }

    pub fn failing(status: u16) -> Self {
        Self::new(StubBehavior::Fail(status))
    }

    fn new(behavior: StubBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, _secret: &Secret, prompt: &str) -> Result<String, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.behavior {
            StubBehavior::Reply(text) => Ok(text.clone()),
            StubBehavior::Fail(status) => Err(ServiceError::Status {
                status: *status,
                body: "stubbed failure".to_string(),
            }),
        }
    }
}

pub const STRUCTURED_REPLY: &str = "## TITLES
1. Learn Python in 30 Days: A Complete Beginner Roadmap (clear promise)
2. Python From Scratch: 30 Days to Your First Real Project
3. I Learned Python in 30 Days - Here's the Exact Plan
4. 30 Days of Python: Zero to Confident Programmer
5. The 30-Day Python Challenge for Absolute Beginners
6. How I'd Learn Python in 30 Days (If I Started Over)
7. Python for Beginners: 30 Days, 30 Lessons
8. Stop Struggling: Learn Python in 30 Days

## DESCRIPTION
Want to learn Python from scratch? This 30-day plan takes you from zero to writing real programs.

00:00 Intro
02:15 Week one: the basics

#python #programming #beginner

## TAGS
Primary tags: python, learn python, python tutorial
Secondary tags: python for beginners, programming basics, coding
Trending tags: ai with python, 30 day challenge

## THUMBNAIL IDEAS
1. Calendar with 30 crossed-out days and the Python logo
Text overlay: 30 DAYS TO PYTHON

2. Split screen before and after, confused face to confident face
Text overlay: ZERO TO CODER
";

pub fn python_request() -> GenerationRequest {
    GenerationRequest {
        script: "How to learn Python from scratch in 30 days".to_string(),
        video_type: VideoType::Tutorial,
        audience: "Beginners".to_string(),
        tone: Tone::Educational,
        keywords: vec![
            "Python".to_string(),
            "programming".to_string(),
            "beginner".to_string(),
        ],
        ..Default::default()
    }
}
