//! This module defines built-in lexica that can be useful in testing or as
//! a default input for the batch driver.

/// A full English lexicon: six semantic noun classes, nineteen verb frames
/// in the past tense (so active and passive forms share one surface form),
/// seven adjective classes, three adverb classes and two disjoint by-phrase
/// groups.
pub const ENGLISH: &str = r#"{
  "noun_classes": {
    "human": {
      "nouns": ["lawyer", "doctor", "teacher", "farmer", "banker", "poet", "soldier", "nurse", "actor", "painter"],
      "matrix_verbs": ["admired", "praised", "criticized", "remembered", "described", "trusted", "chased", "devoured", "tasted", "carried", "repaired", "awarded", "presented", "examined", "impressed"],
      "adjective_classes": ["character", "age"]
    },
    "animal": {
      "nouns": ["dog", "cat", "horse", "rabbit", "monkey", "pigeon", "goat", "fox"],
      "matrix_verbs": ["chased", "startled", "devoured", "pleased", "delighted"],
      "adjective_classes": ["size", "appearance"]
    },
    "edible": {
      "nouns": ["apple", "cake", "carrot", "peach", "biscuit", "mushroom", "pear", "melon"],
      "matrix_verbs": ["pleased", "delighted"],
      "adjective_classes": ["taste", "size"]
    },
    "artifact": {
      "nouns": ["book", "painting", "statue", "letter", "machine", "blanket", "mirror", "wagon"],
      "matrix_verbs": ["pleased", "delighted", "impressed"],
      "adjective_classes": ["appearance", "age"]
    },
    "achievable": {
      "nouns": ["prize", "medal", "diploma", "trophy", "reward", "certificate"],
      "matrix_verbs": ["pleased", "delighted", "impressed"],
      "adjective_classes": ["value"]
    },
    "antipower": {
      "nouns": ["committee", "council", "ministry", "board", "bureau", "agency"],
      "matrix_verbs": ["praised", "criticized", "awarded", "promised", "presented"],
      "adjective_classes": ["status"]
    }
  },
  "verbs": {
    "admired": {
      "subject_classes": ["human"],
      "object_classes": ["human", "artifact"],
      "adverb_classes": ["manner", "degree"],
      "by_phrases": ["by himself", "by herself", "by design"]
    },
    "praised": {
      "subject_classes": ["human", "antipower"],
      "object_classes": ["human"],
      "adverb_classes": ["manner", "degree"],
      "by_phrases": ["by himself", "by herself", "by mistake"]
    },
    "criticized": {
      "subject_classes": ["human", "antipower"],
      "object_classes": ["human", "artifact"],
      "adverb_classes": ["manner", "time"],
      "by_phrases": ["by himself", "by herself", "by nightfall"]
    },
    "remembered": {
      "subject_classes": ["human"],
      "object_classes": ["human", "animal", "artifact"],
      "adverb_classes": ["time", "degree"],
      "by_phrases": ["by accident", "by midday"]
    },
    "described": {
      "subject_classes": ["human"],
      "object_classes": ["animal", "artifact"],
      "adverb_classes": ["manner", "time"],
      "by_phrases": ["by himself", "by herself", "by design"]
    },
    "trusted": {
      "subject_classes": ["human"],
      "object_classes": ["human"],
      "adverb_classes": ["degree"],
      "by_phrases": ["by accident", "by mistake"]
    },
    "chased": {
      "subject_classes": ["animal", "human"],
      "object_classes": ["animal"],
      "adverb_classes": ["manner", "time"],
      "by_phrases": ["by himself", "by herself", "by itself", "by nightfall"]
    },
    "startled": {
      "subject_classes": ["animal"],
      "object_classes": ["human", "animal"],
      "adverb_classes": ["time", "manner"],
      "by_phrases": ["by accident", "by mistake"]
    },
    "devoured": {
      "subject_classes": ["animal", "human"],
      "object_classes": ["edible"],
      "adverb_classes": ["time", "manner"],
      "by_phrases": ["by itself", "by midday"]
    },
    "tasted": {
      "subject_classes": ["human"],
      "object_classes": ["edible"],
      "adverb_classes": ["time", "degree"],
      "by_phrases": ["by accident", "by design"]
    },
    "carried": {
      "subject_classes": ["human"],
      "object_classes": ["artifact", "edible"],
      "adverb_classes": ["manner", "time"],
      "by_phrases": ["by himself", "by herself", "by midday"]
    },
    "repaired": {
      "subject_classes": ["human"],
      "object_classes": ["artifact"],
      "adverb_classes": ["manner", "time"],
      "by_phrases": ["by himself", "by herself", "by nightfall"]
    },
    "awarded": {
      "subject_classes": ["antipower", "human"],
      "object_classes": ["achievable"],
      "adverb_classes": ["time", "manner"],
      "by_phrases": ["by accident", "by mistake"]
    },
    "promised": {
      "subject_classes": ["antipower"],
      "object_classes": ["achievable"],
      "adverb_classes": ["time", "degree"],
      "by_phrases": ["by itself", "by design"]
    },
    "presented": {
      "subject_classes": ["human", "antipower"],
      "object_classes": ["achievable", "artifact"],
      "adverb_classes": ["manner", "time"],
      "by_phrases": ["by himself", "by herself", "by midday"]
    },
    "examined": {
      "subject_classes": ["human"],
      "object_classes": ["animal", "artifact", "edible"],
      "adverb_classes": ["degree", "time"],
      "by_phrases": ["by himself", "by herself", "by accident", "by design"]
    },
    "pleased": {
      "subject_classes": ["edible", "artifact", "achievable", "animal"],
      "object_classes": ["human"],
      "adverb_classes": ["degree", "time"],
      "by_phrases": ["by itself", "by design"]
    },
    "delighted": {
      "subject_classes": ["edible", "artifact", "achievable", "animal"],
      "object_classes": ["human", "antipower"],
      "adverb_classes": ["degree", "manner"],
      "by_phrases": ["by itself", "by mistake"]
    },
    "impressed": {
      "subject_classes": ["artifact", "achievable", "human"],
      "object_classes": ["human", "antipower"],
      "adverb_classes": ["degree", "time"],
      "by_phrases": ["by itself", "by nightfall"]
    }
  },
  "adjectives": {
    "character": ["honest", "greedy", "brave", "gentle", "stubborn", "cheerful", "humble", "arrogant"],
    "age": ["old", "young", "ancient", "modern", "elderly", "recent"],
    "size": ["small", "large", "tiny", "enormous", "narrow", "broad"],
    "appearance": ["shiny", "faded", "colorful", "plain", "ragged", "elegant"],
    "taste": ["sweet", "bitter", "salty", "spicy", "bland", "sour"],
    "value": ["prestigious", "valuable", "coveted", "modest", "generous", "dubious"],
    "status": ["powerful", "obscure", "influential", "minor", "notorious", "respected"]
  },
  "adverbs": {
    "time": ["yesterday", "recently", "today", "earlier", "lately", "afterwards"],
    "manner": ["quietly", "carefully", "eagerly", "roughly", "politely", "hastily"],
    "degree": ["thoroughly", "barely", "deeply", "utterly", "mildly", "keenly"]
  },
  "plurals": {
    "lawyer": "lawyers", "doctor": "doctors", "teacher": "teachers", "farmer": "farmers",
    "banker": "bankers", "poet": "poets", "soldier": "soldiers", "nurse": "nurses",
    "actor": "actors", "painter": "painters",
    "dog": "dogs", "cat": "cats", "horse": "horses", "rabbit": "rabbits",
    "monkey": "monkeys", "pigeon": "pigeons", "goat": "goats", "fox": "foxes",
    "apple": "apples", "cake": "cakes", "carrot": "carrots", "peach": "peaches",
    "biscuit": "biscuits", "mushroom": "mushrooms", "pear": "pears", "melon": "melons",
    "book": "books", "painting": "paintings", "statue": "statues", "letter": "letters",
    "machine": "machines", "blanket": "blankets", "mirror": "mirrors", "wagon": "wagons",
    "prize": "prizes", "medal": "medals", "diploma": "diplomas", "trophy": "trophies",
    "reward": "rewards", "certificate": "certificates",
    "committee": "committees", "council": "councils", "ministry": "ministries",
    "board": "boards", "bureau": "bureaus", "agency": "agencies"
  },
  "by_phrase_groups": [
    ["by himself", "by herself", "by itself", "by accident"],
    ["by design", "by mistake", "by midday", "by nightfall"]
  ]
}"#;

/// A minimal two-class, two-verb lexicon. Small enough to reason about by
/// hand but large enough for an adapt/test split with disjoint vocabulary.
pub const TOY: &str = r#"{
  "noun_classes": {
    "human": {
      "nouns": ["teacher", "doctor", "lawyer", "farmer", "banker", "poet", "nurse", "actor"],
      "matrix_verbs": ["admired", "impressed"],
      "adjective_classes": ["quality"]
    },
    "thing": {
      "nouns": ["book", "stone", "ladder", "bucket", "mirror", "kettle", "ribbon", "basket"],
      "matrix_verbs": ["impressed"],
      "adjective_classes": ["quality"]
    }
  },
  "verbs": {
    "admired": {
      "subject_classes": ["human"],
      "object_classes": ["human", "thing"],
      "adverb_classes": ["manner"],
      "by_phrases": ["by himself", "by herself", "by design"]
    },
    "impressed": {
      "subject_classes": ["thing", "human"],
      "object_classes": ["human"],
      "adverb_classes": ["manner"],
      "by_phrases": ["by itself", "by accident", "by mistake"]
    }
  },
  "adjectives": {
    "quality": ["old", "strange", "heavy", "bright", "dusty", "narrow"]
  },
  "adverbs": {
    "manner": ["quietly", "slowly", "eagerly", "calmly", "boldly", "gently"]
  },
  "plurals": {
    "teacher": "teachers", "doctor": "doctors", "lawyer": "lawyers", "farmer": "farmers",
    "banker": "bankers", "poet": "poets", "nurse": "nurses", "actor": "actors",
    "book": "books", "stone": "stones", "ladder": "ladders", "bucket": "buckets",
    "mirror": "mirrors", "kettle": "kettles", "ribbon": "ribbons", "basket": "baskets"
  },
  "by_phrase_groups": [
    ["by himself", "by herself", "by itself", "by accident"],
    ["by design", "by mistake"]
  ]
}"#;
