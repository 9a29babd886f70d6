//! The bundled default knowledge base shipped with the application.
//!
//! Loading falls back to this set whenever the persisted save is absent,
//! unreadable, or predates it (see [`super::FRESHNESS_THRESHOLD`]).

use wellness_rules::StressLevel::{High, Medium};

use super::KnowledgeItem;

/// Build the bundled default set.
///
/// Covers greetings, emotional states, physical wellbeing, app-feature
/// navigation, and casual chit-chat. Short literal ids are stable across
/// releases so saves remain diffable.
pub fn default_knowledge_base() -> Vec<KnowledgeItem> {
    vec![
        // Greetings & basics
        KnowledgeItem::bundled("g01", "hello", "Hello! It's so good to see you. How are you feeling right now?"),
        KnowledgeItem::bundled("g02", "hi", "Hi there! I'm here for you. What's on your mind?"),
        KnowledgeItem::bundled("g03", "hey", "Hey! I hope your day is going nicely. How can I support you?"),
        KnowledgeItem::bundled("g04", "good morning", "Good morning! I hope you slept well. Ready to start the day with some mindfulness?"),
        KnowledgeItem::bundled("g05", "good afternoon", "Good afternoon! Remember to take a small break if you haven't yet."),
        KnowledgeItem::bundled("g06", "good night", "Good night. May you have a restful and peaceful sleep."),
        KnowledgeItem::bundled("g07", "who are you", "I'm MindfulMe, your personal wellness companion. I'm here to listen, support, and help you thrive."),
        KnowledgeItem::bundled("g08", "what can you do", "I can chat with you about your feelings, guide you through breathing exercises, help you track your mood, and suggest wellness activities. Just ask!"),
        KnowledgeItem::bundled("g09", "thank you", "You're very welcome. It's an honor to support you."),
        KnowledgeItem::bundled("g10", "bye", "Take care of yourself. Remember, I'm always here if you need to talk."),
        // Anxiety & stress
        KnowledgeItem::bundled("e01", "anxious", "I hear you, and it's okay to feel this way. Anxiety comes in waves. Shall we try a quick grounding exercise together?")
            .with_stress_level(Medium)
            .with_action("Breathing Exercise"),
        KnowledgeItem::bundled("e02", "anxiety", "Anxiety can be really draining. You are safe here. Focus on your feet on the floor. Take a deep breath with me.")
            .with_stress_level(Medium)
            .with_action("Breathing Exercise"),
        KnowledgeItem::bundled("e03", "panic", "You are safe. I'm right here. Focus on your breathing. Inhale deeply... hold... and exhale slowly. Let's do this together.")
            .with_stress_level(High)
            .with_action("Breathing Exercise"),
        KnowledgeItem::bundled("e04", "stressed", "Stress is a heavy weight to carry. It sounds like you're dealing with a lot. Have you been able to take a short break today?")
            .with_stress_level(High)
            .with_action("Digital Detox")
            .with_action("Breathing Exercise"),
        KnowledgeItem::bundled("e05", "overwhelmed", "It's completely understandable to feel overwhelmed when things pile up. Let's pause. What is one small thing we can put aside for now?")
            .with_stress_level(High)
            .with_action("Digital Detox"),
        KnowledgeItem::bundled("e06", "worried", "Worrying shows that you care, but it can be exhausting. Is there something specific on your mind, or is it a general feeling?")
            .with_stress_level(Medium),
        KnowledgeItem::bundled("e07", "nervous", "It's natural to feel nervous. Trust in your ability to handle whatever comes your way. You've got this.")
            .with_stress_level(Medium),
        KnowledgeItem::bundled("e08", "tension", "I noticed you mentioned tension. Where do you feel it in your body? Sometimes a quick stretch or deep breath can help release it.")
            .with_stress_level(Medium)
            .with_action("Breathing Exercise"),
        // Sadness & low mood
        KnowledgeItem::bundled("e09", "sad", "I'm so sorry you're feeling sad. It's meaningful to honor those feelings. Do you want to vent, or would you prefer a distraction?")
            .with_stress_level(Medium),
        KnowledgeItem::bundled("e10", "depressed", "I'm here for you. Dealing with low mood is incredibly hard. Please remember that you don't have to go through this alone.")
            .with_stress_level(High)
            .with_action("Dashboard"),
        KnowledgeItem::bundled("e11", "lonely", "Loneliness can feel very isolating. Even though I'm an AI, I'm here to keep you company. You are connected to the world in ways you might not see right now.")
            .with_stress_level(Medium),
        KnowledgeItem::bundled("e12", "cry", "It's okay to cry. Tears are a way for your body to release emotions. Let it out; I'm here listening.")
            .with_stress_level(Medium),
        KnowledgeItem::bundled("e13", "hopeless", "I know it feels dark right now, but feelings are like weather—they change. Please hold on. You are valuable.")
            .with_stress_level(High),
        KnowledgeItem::bundled("e14", "tired", "You sound exhausted. It's okay to rest. The world can wait while you recharge.")
            .with_action("Digital Detox"),
        KnowledgeItem::bundled("e15", "unmotivated", "Motivation comes and goes. Sometimes just doing the smallest possible task is enough. Be gentle with yourself.")
            .with_stress_level(Medium),
        // Anger & frustration
        KnowledgeItem::bundled("e16", "angry", "It sounds like you're really frustrated. Anger is a valid emotion. Taking a few deep breaths can sometimes help cool the heat. Want to try?")
            .with_stress_level(Medium)
            .with_action("Breathing Exercise"),
        KnowledgeItem::bundled("e17", "mad", "I hear that verify frustration. It's okay to vent here. Letting it out in a safe space can help.")
            .with_stress_level(Medium),
        KnowledgeItem::bundled("e18", "annoyed", "Little things adding up? That's really common. Maybe stepping away for 5 minutes could give you a reset.")
            .with_action("Digital Detox"),
        KnowledgeItem::bundled("e19", "hate", "That's a very strong word. It sounds like you're in a lot of pain or frustration right now.")
            .with_stress_level(High),
        // Positive emotions
        KnowledgeItem::bundled("p01", "happy", "That makes me so happy to hear! Hold onto this feeling. What's the best thing that happened today?"),
        KnowledgeItem::bundled("p02", "good", "I'm glad to hear that! It's great when things are going well. How are you spending your day?"),
        KnowledgeItem::bundled("p03", "excited", "That's fantastic! Excitement is such a great energy. Tell me more!"),
        KnowledgeItem::bundled("p04", "proud", "You should be! Taking a moment to acknowledge your achievements is so healthy. Well done!"),
        KnowledgeItem::bundled("p05", "calm", "Calm is a beautiful state. Enjoy this peace. It's great for your nervous system."),
        KnowledgeItem::bundled("p06", "grateful", "Gratitude is powerful. Focusing on the good things really shifts our perspective. Thanks for sharing that with me."),
        // Physical wellbeing
        KnowledgeItem::bundled("w01", "sleep", "Sleep is so important. If you're having trouble, maybe try avoiding screens for an hour before bed. A 'Digital Detox' might help.")
            .with_stress_level(Medium)
            .with_action("Digital Detox"),
        KnowledgeItem::bundled("w02", "insomnia", "Can't sleep? That's really tough. Sometimes focusing on your breath can help quiet the mind.")
            .with_stress_level(Medium)
            .with_action("Breathing Exercise"),
        KnowledgeItem::bundled("w03", "headache", "Headaches are often signs of dehydration or eye strain. Have you had some water and a screen break recently?")
            .with_stress_level(Medium)
            .with_action("Digital Detox"),
        KnowledgeItem::bundled("w04", "sick", "I'm sorry you're not feeling well. Please prioritize rest and hydration. Your body needs energy to heal.")
            .with_stress_level(Medium),
        KnowledgeItem::bundled("w05", "workout", "Exercise is such a great mood booster! Even a short walk counts.")
            .with_action("Fitness"),
        KnowledgeItem::bundled("w06", "tired", "Listen to your body. If you're tired, it's asking for rest. Can you take a short nap or just close your eyes?"),
        // App features & navigation
        KnowledgeItem::bundled("f01", "dashboard", "Your dashboard gives you a great overview of your wellness journey. You can track your mood trends there.")
            .with_action("Dashboard"),
        KnowledgeItem::bundled("f02", "stats", "I can take you to the dashboard to see your latest wellness stats.")
            .with_action("Dashboard"),
        KnowledgeItem::bundled("f03", "breathe", "Breathing is the anchor of mindfulness. Let's go to the breathing exercise section.")
            .with_action("Breathing Exercise"),
        KnowledgeItem::bundled("f04", "meditate", "Meditation is a great way to clear the mind. I can guide you to some breathing exercises to start.")
            .with_action("Breathing Exercise"),
        KnowledgeItem::bundled("f05", "detox", "Digital Detox is a great feature to help you unplug and reconnect with yourself. Shall we go there?")
            .with_action("Digital Detox"),
        KnowledgeItem::bundled("f06", "tracking", "You can track your fitness and health metrics in the Fitness section.")
            .with_action("Fitness"),
        KnowledgeItem::bundled("f07", "steps", "Keeping moving is key! Check your step count and activity in the Fitness tracker.")
            .with_action("Fitness"),
        KnowledgeItem::bundled("f08", "health", "Your health insights are available in the Health Analysis section.")
            .with_action("Health"),
        // General & casual
        KnowledgeItem::bundled("c01", "joke", "Why did the scarecrow win an award? Because he was outstanding in his field! 😄"),
        KnowledgeItem::bundled("c02", "story", "Once upon a time, there was a user who took a deep breath and realized everything was going to be okay. The End. Short, but true!"),
        KnowledgeItem::bundled("c03", "boring", "Boredom can actually be a gateway to creativity! Or maybe it's a sign you need a change of pace. How about a quick walk?"),
        KnowledgeItem::bundled("c04", "love", "Love is the most powerful force. Whether it's self-love or love for others, it heals."),
        KnowledgeItem::bundled("c05", "life", "Life is a journey with many twists and turns. The most important step is the one you're taking right now."),
        KnowledgeItem::bundled("c06", "meaning", "Meaning is often found in the connections we make and the small kindnesses we show. What gives your day meaning?")
            .with_stress_level(Medium),
        KnowledgeItem::bundled("c07", "weather", "I can't see outside, but I hope the weather in your heart is sunny! ☀️"),
        // Conversational checks
        KnowledgeItem::bundled("x01", "are you real", "I am a virtual assistant, but my care for your wellbeing is genuine."),
        KnowledgeItem::bundled("x02", "bot", "Yes, I am a bot designed to help you practice mindfulness and track your wellness."),
        KnowledgeItem::bundled("x03", "stupid", "I'm still learning! You can help me improve by using the 'Training Mode'."),
        KnowledgeItem::bundled("x04", "smart", "Thank you! I try my best to be helpful."),
    ]
}
