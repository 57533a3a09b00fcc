use ytscript_models::{Hook, HookType};

use super::strings;

pub fn builtin_hooks() -> Vec<Hook> {
    vec![
        Hook {
            name: "Curiosity Gap".to_string(),
            hook_type: HookType::CuriosityGap,
            description: "Create a gap between what the viewer knows and wants to know".to_string(),
            template: "Eu descobri que quem quer {description} comete quase sempre o mesmo erro... \
                       mas antes de revelar, deixe-me contar como cheguei até aqui."
                .to_string(),
            examples: strings(&[
                "Eu descobri que 90% das pessoas estão fazendo isso errado... mas antes de revelar o que é, deixe-me contar como descobri isso.",
                "Existe um segredo que apenas 1% das pessoas conhecem sobre {topic}... e hoje vou compartilhar com você.",
                "O que vou te mostrar nos próximos minutos pode mudar completamente sua forma de pensar sobre {subject}.",
            ]),
            effectiveness_score: 0.85,
            best_niches: strings(&["educacao", "tecnologia", "negocios"]),
            psychological_principle: "Information Gap Theory - O cérebro humano tem necessidade compulsiva de preencher lacunas de informação".to_string(),
            markers: strings(&[
                r"eu descobri que",
                r"existe um segredo",
                r"o que vou.*mostrar",
                r"você não vai acreditar",
                r"descoberta.*surpreendente",
            ]),
        },
        Hook {
            name: "Controversy Hook".to_string(),
            hook_type: HookType::Controversy,
            description: "Present a controversial statement or opinion".to_string(),
            template: "Quase tudo que te ensinaram sobre {description} está errado. \
                       Eu sei que isso vai contra tudo que você acredita, mas..."
                .to_string(),
            examples: strings(&[
                "Quase tudo que te ensinaram sobre {topic} está errado. Eu sei que isso vai contra tudo que você acredita, mas...",
                "Trabalhar duro NÃO te fará rico. Na verdade, pode até te deixar mais pobre...",
                "95% dos cursos online são golpe. E vou provar isso para você nos próximos minutos.",
            ]),
            effectiveness_score: 0.75,
            best_niches: strings(&["negocios", "educacao", "lifestyle"]),
            psychological_principle: "Cognitive Dissonance - Desconforto mental quando apresentado com informações que contradizem crenças existentes".to_string(),
            markers: strings(&[
                r"vai contra tudo",
                r"é uma mentira",
                r"não é verdade",
                r"estão.*errado",
                r"a verdade é",
            ]),
        },
        Hook {
            name: "Personal Story Hook".to_string(),
            hook_type: HookType::PersonalStory,
            description: "Start with a personal, relatable story".to_string(),
            template: "Há dois anos atrás, eu estava tentando {description} e falhando todos os dias. \
                       Hoje, tudo mudou. Deixe-me contar como."
                .to_string(),
            examples: strings(&[
                "Há 2 anos atrás, eu estava começando do zero com {topic}. Hoje, tudo mudou. Deixe-me contar como.",
                "Eu já perdi muito tempo e dinheiro tentando aprender {subject}. Mas esse erro me ensinou a estratégia que uso hoje.",
                "Na escola, eu era o nerd que ninguém levava a sério. Hoje, ensino {topic} para milhares de pessoas.",
            ]),
            effectiveness_score: 0.80,
            best_niches: strings(&["lifestyle", "negocios", "desenvolvimento_pessoal"]),
            psychological_principle: "Narrative Transportation - Pessoas se conectam emocionalmente através de histórias pessoais".to_string(),
            markers: strings(&[
                r"há.*anos.*atrás",
                r"eu estava",
                r"comigo aconteceu",
                r"minha história",
                r"quando eu.*tinha",
            ]),
        },
        Hook {
            name: "Statistics Shock".to_string(),
            hook_type: HookType::StatisticsShock,
            description: "Present shocking or surprising statistics".to_string(),
            template: "97% das pessoas que tentam {description} desistem no primeiro ano. \
                       Se você não quer fazer parte dessa estatística..."
                .to_string(),
            examples: strings(&[
                "97% das pessoas que começam a estudar {topic} desistem no primeiro ano. Se você não quer fazer parte dessa estatística...",
                "A pessoa média gasta 7 anos da sua vida no trabalho e morre com apenas R$ 1.000 na conta. Mas existe uma forma diferente...",
                "Apenas 2% das pessoas conseguem se aposentar confortavelmente. O resto depende da família ou do governo.",
            ]),
            effectiveness_score: 0.70,
            best_niches: strings(&["negocios", "financas", "saude"]),
            psychological_principle: "Loss Aversion - Medo de perder ou ficar para trás motiva mais que o desejo de ganhar".to_string(),
            markers: strings(&[
                r"\d+%.*pessoas",
                r"\d+.*em cada",
                r"apenas \d+%",
                r"mais de \d+.*milhões",
                r"estatística.*chocante",
            ]),
        },
        Hook {
            name: "Direct Question".to_string(),
            hook_type: HookType::QuestionDirect,
            description: "Ask a direct, engaging question to the viewer".to_string(),
            template: "Você já se perguntou por que é tão difícil {description}? A resposta pode te surpreender..."
                .to_string(),
            examples: strings(&[
                "Você já se perguntou por que algumas pessoas conseguem dominar {topic} enquanto outras lutam a vida inteira?",
                "Qual é a diferença entre quem domina {subject} e quem desiste no meio do caminho?",
                "Se você pudesse mudar uma coisa na sua vida hoje, o que seria? E se eu te dissesse que é possível?",
            ]),
            effectiveness_score: 0.65,
            best_niches: strings(&["desenvolvimento_pessoal", "educacao", "lifestyle"]),
            psychological_principle: "Self-Reference Effect - Pessoas prestam mais atenção quando se sentem diretamente incluídas".to_string(),
            markers: strings(&[
                r"você já se perguntou",
                r"qual.*diferença",
                r"por que.*algumas pessoas",
                r"você sabia que",
                r"já aconteceu.*você",
            ]),
        },
        Hook {
            name: "Pattern Interrupt Hook".to_string(),
            hook_type: HookType::PatternInterrupt,
            description: "Break the viewer's scrolling autopilot with an abrupt opening".to_string(),
            template: "Pare tudo. Antes de você tentar {description}, preciso te mostrar uma coisa."
                .to_string(),
            examples: strings(&[
                "Pare tudo. Se você assiste vídeos sobre {topic}, precisa ver isso primeiro.",
                "Não pule este vídeo. Em trinta segundos você vai entender por quê.",
            ]),
            effectiveness_score: 0.72,
            best_niches: strings(&["tecnologia", "entretenimento", "lifestyle"]),
            psychological_principle: "Orienting Response - Estímulos inesperados forçam o cérebro a prestar atenção".to_string(),
            markers: strings(&[
                r"pare tudo",
                r"não pule este vídeo",
                r"antes de você.*preciso te mostrar",
            ]),
        },
        Hook {
            name: "Preview Teaser".to_string(),
            hook_type: HookType::PreviewTeaser,
            description: "Show the payoff up front and promise the path to it".to_string(),
            template: "No final deste vídeo você vai saber exatamente como {description}. \
                       Mas o caminho até lá tem uma surpresa."
                .to_string(),
            examples: strings(&[
                "No final deste vídeo você vai dominar {subject} de um jeito que ninguém te mostrou.",
                "Olha o resultado que vamos construir hoje. Até o final do vídeo você vai saber fazer igual.",
            ]),
            effectiveness_score: 0.78,
            best_niches: strings(&["tecnologia", "tutoriais", "educacao"]),
            psychological_principle: "Goal Gradient Effect - Ver o destino aumenta a motivação para chegar até ele".to_string(),
            markers: strings(&[
                r"no final deste vídeo",
                r"até o final do vídeo",
                r"você vai saber exatamente",
                r"o resultado que vamos construir",
            ]),
        },
        Hook {
            name: "Emotional Trigger".to_string(),
            hook_type: HookType::EmotionalTrigger,
            description: "Name a feeling the viewer already has about the topic".to_string(),
            template: "Eu sei como é frustrante tentar {description} e sentir que nada funciona. \
                       Você não está sozinho."
                .to_string(),
            examples: strings(&[
                "Eu sei como é frustrante estudar {topic} e sentir que não sai do lugar. Você não está sozinho.",
                "Se você já sentiu vontade de desistir de {subject}, este vídeo é para você.",
            ]),
            effectiveness_score: 0.68,
            best_niches: strings(&["desenvolvimento_pessoal", "saude", "lifestyle"]),
            psychological_principle: "Emotional Contagion - Emoções nomeadas criam conexão imediata".to_string(),
            markers: strings(&[
                r"eu sei como é",
                r"frustrante",
                r"você não está sozinho",
                r"vontade de desistir",
            ]),
        },
        Hook {
            name: "Authority Statement".to_string(),
            hook_type: HookType::AuthorityStatement,
            description: "Open with credentials that make the viewer trust what follows".to_string(),
            template: "Depois de dez anos trabalhando com {topic} e ajudando milhares de pessoas a {description}, \
                       aprendi o que realmente funciona."
                .to_string(),
            examples: strings(&[
                "Depois de dez anos trabalhando com {topic}, aprendi o que realmente funciona e o que é perda de tempo.",
                "Já ajudei milhares de pessoas com {subject}. Hoje vou te mostrar o método que mais dá resultado.",
            ]),
            effectiveness_score: 0.74,
            best_niches: strings(&["tecnologia", "negocios", "financas"]),
            psychological_principle: "Authority Bias - Pessoas confiam mais em quem demonstra experiência".to_string(),
            markers: strings(&[
                r"depois de \w+ anos",
                r"anos trabalhando com",
                r"ajudei milhares de pessoas",
                r"como especialista",
            ]),
        },
    ]
}
