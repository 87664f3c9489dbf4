//! Embedded general word list and uniform random selection.
//!
//! The list is a subset of common English words in the spirit of the
//! usual "random word" generators. Entries are lowercase and picked
//! uniformly; rhymability is the rhyme service's problem.

use rand::RngExt;

/// General-purpose word pool the bot seeds sentences from.
pub const WORDS: &[&str] = &[
    "able", "acoustic", "action", "advice", "afternoon", "agreement", "air", "amount", "anger",
    "angle", "animal", "answer", "apparel", "apple", "argument", "arm", "army", "art", "attack",
    "aunt", "authority", "baby", "back", "badge", "bag", "ball", "balloon", "base", "basin",
    "basket", "bat", "bath", "battle", "bead", "bear", "bed", "bee", "beginner", "behavior",
    "belief", "bell", "berry", "bike", "bird", "bit", "blade", "blood", "board", "boat", "bone",
    "book", "boot", "border", "bottle", "box", "boy", "brain", "branch", "bread", "brick",
    "bridge", "brother", "brush", "bubble", "bucket", "building", "bulb", "bun", "burst", "bush",
    "business", "butter", "button", "cabbage", "cable", "cake", "calendar", "camera", "camp",
    "can", "cannon", "cap", "car", "card", "care", "carpenter", "cart", "cast", "cat", "cause",
    "cave", "cellar", "chain", "chair", "chalk", "chance", "change", "channel", "cheese",
    "cherry", "chess", "chicken", "chin", "church", "circle", "claim", "class", "clock", "cloth",
    "cloud", "clover", "club", "coach", "coal", "coast", "coat", "coil", "coin", "color", "comb",
    "company", "condition", "control", "copper", "copy", "cord", "corn", "cough", "country",
    "cover", "cow", "crack", "crate", "crayon", "cream", "creature", "crib", "crime", "crow",
    "crowd", "crown", "cup", "current", "curtain", "curve", "cushion", "dad", "daughter", "day",
    "death", "decision", "deer", "degree", "design", "desire", "desk", "detail", "dime", "dinner",
    "dirt", "discovery", "distance", "dock", "doctor", "dog", "doll", "donkey", "door", "downtown",
    "drain", "drawer", "dress", "drink", "drop", "duck", "dust", "ear", "earth", "edge", "effect",
    "egg", "elbow", "end", "error", "event", "example", "exchange", "eye", "face", "fact", "fall",
    "fang", "farm", "father", "fear", "feast", "field", "finger", "fire", "fish", "flag", "flame",
    "flavor", "flight", "flock", "floor", "flower", "fog", "fold", "food", "foot", "force",
    "fork", "form", "fowl", "frame", "friend", "frog", "front", "fruit", "fuel", "furniture",
    "game", "garden", "gate", "ghost", "giraffe", "girl", "glass", "glove", "goat", "gold",
    "goose", "grade", "grain", "grape", "grass", "ground", "group", "growth", "guide", "guitar",
    "gun", "hair", "hall", "hand", "harbor", "harmony", "hat", "head", "heart", "heat", "hill",
    "hobby", "hole", "home", "honey", "hook", "hope", "horn", "horse", "hose", "hour", "house",
    "ice", "idea", "income", "insect", "iron", "island", "jail", "jam", "jar", "jelly", "jewel",
    "join", "judge", "juice", "jump", "kettle", "key", "kick", "kitten", "knee", "knife", "knot",
    "lace", "lake", "lamp", "land", "language", "laugh", "lead", "leaf", "letter", "level",
    "light", "limit", "line", "lip", "list", "lock", "look", "loss", "love", "lunch", "machine",
    "magic", "maid", "mailbox", "man", "map", "marble", "mark", "market", "mask", "match", "meal",
    "meat", "metal", "mice", "middle", "milk", "mind", "mine", "minute", "mist", "mitten", "mom",
    "money", "month", "moon", "morning", "mother", "mountain", "mouth", "move", "name", "nation",
    "neck", "need", "nest", "net", "night", "noise", "north", "nose", "note", "number", "nut",
    "ocean", "offer", "office", "oil", "orange", "order", "oven", "page", "pail", "pain", "paint",
    "pan", "paper", "part", "party", "paste", "patch", "path", "peace", "pear", "pen", "pencil",
    "pest", "pet", "pickle", "picture", "pie", "pig", "pin", "pipe", "plane", "plant", "plate",
    "play", "plot", "point", "porter", "position", "pot", "powder", "power", "price", "print",
    "prose", "pull", "pump", "purpose", "push", "quarter", "queen", "question", "quiet", "quill",
    "rabbit", "rail", "rain", "rake", "range", "rate", "ray", "reason", "regret", "rest",
    "reward", "rhythm", "rice", "riddle", "ring", "river", "road", "robin", "rock", "roll",
    "roof", "room", "root", "rose", "route", "rub", "rule", "run", "sack", "sail", "salt", "sand",
    "scale", "scarf", "school", "science", "sea", "seat", "seed", "shade", "shake", "shame",
    "shape", "sheep", "sheet", "shelf", "ship", "shirt", "shoe", "shop", "show", "side", "sign",
    "silk", "silver", "sink", "sister", "size", "skate", "skin", "skirt", "sky", "sleet", "slope",
    "smash", "smell", "smile", "smoke", "snail", "snake", "sneeze", "snow", "soap", "sock",
    "soda", "sofa", "son", "song", "sort", "sound", "soup", "space", "spade", "spark", "spoon",
    "spot", "spring", "spy", "square", "squirrel", "stage", "stamp", "star", "start", "station",
    "steam", "steel", "stem", "step", "stew", "stick", "stitch", "stone", "store", "story",
    "stove", "stranger", "straw", "stream", "street", "stretch", "string", "sugar", "suit",
    "summer", "sun", "support", "surprise", "sweater", "swim", "swing", "table", "tail", "talk",
    "tank", "team", "tent", "test", "thing", "thought", "thread", "thrill", "throne", "thumb",
    "thunder", "ticket", "tiger", "time", "tin", "title", "toad", "toe", "tooth", "top", "town",
    "toy", "trade", "trail", "train", "tray", "treatment", "tree", "trick", "trip", "trouble",
    "truck", "tub", "turkey", "turn", "twig", "twist", "umbrella", "uncle", "unit", "use",
    "value", "van", "vase", "vein", "verse", "vest", "view", "voice", "volcano", "voyage",
    "walk", "wall", "war", "wash", "watch", "water", "wave", "wax", "way", "wealth", "weather",
    "week", "wheel", "whip", "whistle", "wind", "window", "wine", "wing", "winter", "wire",
    "wish", "wood", "wool", "word", "work", "world", "worm", "wound", "wren", "wrist", "year",
    "zebra", "zinc", "zoo",
];

/// Draw one word uniformly from the pool.
pub fn random_word() -> &'static str {
    let mut rng = rand::rng();
    WORDS[rng.random_range(0..WORDS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_is_non_trivial() {
        assert!(WORDS.len() > 100);
    }

    #[test]
    fn random_word_comes_from_pool() {
        for _ in 0..50 {
            let word = random_word();
            assert!(WORDS.contains(&word));
        }
    }

    #[test]
    fn words_are_lowercase_and_non_empty() {
        for word in WORDS {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "unexpected word {:?}",
                word
            );
        }
    }

    #[test]
    fn no_duplicate_words() {
        let mut seen = std::collections::HashSet::new();
        for word in WORDS {
            assert!(seen.insert(word), "duplicate word {:?}", word);
        }
    }
}
