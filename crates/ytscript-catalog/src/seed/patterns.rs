use ytscript_models::{EngagementTechnique, EngagementType, TimingMarker};

use super::strings;

pub fn builtin_patterns() -> Vec<EngagementTechnique> {
    vec![
        EngagementTechnique {
            name: "Pattern Interrupt".to_string(),
            technique_type: EngagementType::PatternInterrupt,
            description: "Quebrar o padrão esperado para reganhar atenção".to_string(),
            when_to_use: "Quando a energia está baixando ou o conteúdo está ficando monótono".to_string(),
            template: "Espera, tem uma coisa sobre {topic} que eu ainda não te contei. Deixe-me explicar melhor..."
                .to_string(),
            examples: strings(&[
                "Espera, eu acabei de falar bobagem. Na verdade...",
                "Pare tudo! Esqueci de mencionar o mais importante...",
                "Ops, você percebeu esse erro que cometi?",
                "Aliás, você sabia que isso que acabei de falar pode estar errado?",
            ]),
            effectiveness_score: 0.80,
            timing_recommendations: vec![
                TimingMarker::minute(3.5, "3-4 minutos"),
                TimingMarker::minute(7.5, "7-8 minutos"),
                TimingMarker::fraction(0.6, "Quando notar queda de energia"),
            ],
            markers: strings(&[r"\bespera\b", r"pare tudo", r"calma aí", r"\bops\b", r"\baliás\b"]),
        },
        EngagementTechnique {
            name: "Callback Reference".to_string(),
            technique_type: EngagementType::Callback,
            description: "Referenciar algo mencionado anteriormente no vídeo".to_string(),
            when_to_use: "Para criar coesão e fazer a audiência se sentir 'por dentro'".to_string(),
            template: "Lembra do que eu falei no início sobre {topic}? Agora faz sentido porque tudo se conecta."
                .to_string(),
            examples: strings(&[
                "Lembra da história que contei no início sobre meu fracasso? Agora você entende porque foi importante...",
                "Aquela estatística chocante do começo? Agora vou te mostrar como mudá-la...",
                "Voltando àquela pergunta que fiz no início...",
            ]),
            effectiveness_score: 0.75,
            timing_recommendations: vec![
                TimingMarker::fraction(0.5, "Meio do vídeo"),
                TimingMarker::fraction(0.9, "Conclusão"),
                TimingMarker::fraction(0.65, "Após explicações complexas"),
            ],
            markers: strings(&[
                r"lembra.*início",
                r"como.*falei",
                r"voltando.*aquela",
                r"aquela.*história",
                r"como.*mencionei",
            ]),
        },
        EngagementTechnique {
            name: "Suspense Builder".to_string(),
            technique_type: EngagementType::SuspenseBuilder,
            description: "Criar antecipação para o que vem a seguir".to_string(),
            when_to_use: "Antes de revelar informações importantes".to_string(),
            template: "Daqui a pouco vou revelar o detalhe mais importante sobre {subject}. Mas primeiro..."
                .to_string(),
            examples: strings(&[
                "Em 2 minutos, vou te mostrar o segredo que mudou tudo. Mas primeiro, você precisa entender...",
                "Daqui a pouco vou revelar o erro que 90% das pessoas cometem. Mas antes...",
                "Aguenta aí que a parte mais importante vem agora...",
                "O que vou te contar em seguida vai te chocar, mas antes preciso contextualizar...",
            ]),
            effectiveness_score: 0.85,
            timing_recommendations: vec![
                TimingMarker::fraction(0.4, "Antes de pontos importantes"),
                TimingMarker::fraction(0.3, "Transições entre seções"),
                TimingMarker::fraction(0.5, "Meio do vídeo"),
            ],
            markers: strings(&[
                r"mas primeiro",
                r"vou revelar",
                r"aguenta aí",
                r"em seguida vai te chocar",
            ]),
        },
        EngagementTechnique {
            name: "Interaction Prompt".to_string(),
            technique_type: EngagementType::InteractionPrompt,
            description: "Pedir interação direta da audiência".to_string(),
            when_to_use: "Para aumentar engagement e manter atenção ativa".to_string(),
            template: "Deixe nos comentários: qual é a sua maior dificuldade com {topic}? Quero saber sua experiência."
                .to_string(),
            examples: strings(&[
                "Deixe nos comentários: qual foi seu maior erro ao começar? Quero ler todas as histórias...",
                "Escreva SIM nos comentários se você já passou por isso...",
                "Pausa o vídeo agora e responda honestamente: você realmente faz isso?",
                "Dê like se você concorda comigo até aqui...",
            ]),
            effectiveness_score: 0.70,
            timing_recommendations: vec![
                TimingMarker::fraction(0.5, "Meio do vídeo"),
                TimingMarker::fraction(0.6, "Após pontos importantes"),
                TimingMarker::fraction(0.95, "Final do vídeo"),
            ],
            markers: strings(&[
                r"deixe.*comentários",
                r"escreva.*sim",
                r"dê.*like",
                r"se.*inscreva",
                r"compartilhe",
            ]),
        },
        EngagementTechnique {
            name: "Visual Transition".to_string(),
            technique_type: EngagementType::VisualTransition,
            description: "Usar um elemento visual para marcar a mudança de assunto".to_string(),
            when_to_use: "Na passagem entre blocos de conteúdo ou antes de um exemplo".to_string(),
            template: "Olha na tela este exemplo de {topic} para ficar mais claro.".to_string(),
            examples: strings(&[
                "Olha na tela o que acontece quando fazemos isso...",
                "Como você pode ver neste gráfico, a diferença é enorme...",
                "Repare nesta imagem antes de continuarmos...",
            ]),
            effectiveness_score: 0.68,
            timing_recommendations: vec![
                TimingMarker::fraction(0.25, "Início de novas seções"),
                TimingMarker::fraction(0.75, "Mudança de assunto"),
            ],
            markers: strings(&[
                r"olha na tela",
                r"veja na tela",
                r"como você pode ver",
                r"repare nesta imagem",
            ]),
        },
        EngagementTechnique {
            name: "Energy Shift".to_string(),
            technique_type: EngagementType::EnergyShift,
            description: "Mudar o nível de energia para reengajar a audiência".to_string(),
            when_to_use: "Quando a energia está baixa ou o ritmo está lento".to_string(),
            template: "Prestem atenção agora porque isso é {emphasis} importante!".to_string(),
            examples: strings(&[
                "Agora vou falar mais devagar porque isso é fundamental...",
                "Prestem atenção agora porque isso é crucial!",
                "Vou repetir isso porque é importante: ...",
                "Okay, agora vamos acelerar porque eu quero te mostrar...",
            ]),
            effectiveness_score: 0.65,
            timing_recommendations: vec![
                TimingMarker::fraction(0.45, "Pontos cruciais"),
                TimingMarker::fraction(0.7, "Quando detectar perda de atenção"),
                TimingMarker::fraction(0.55, "Transições importantes"),
            ],
            markers: strings(&[
                r"prestem atenção",
                r"vou falar mais devagar",
                r"vou repetir",
                r"vamos acelerar",
            ]),
        },
        EngagementTechnique {
            name: "Preview Hook".to_string(),
            technique_type: EngagementType::PreviewHook,
            description: "Dar preview do que está por vir para manter interesse".to_string(),
            when_to_use: "Durante transições e para manter expectativa".to_string(),
            template: "Daqui a pouco você vai ver exatamente como aplicar isso em {topic}, mas antes..."
                .to_string(),
            examples: strings(&[
                "Daqui a pouco você vai ver exatamente como fazer isso, mas primeiro precisa entender a teoria...",
                "Em breve vou mostrar os resultados na tela, mas antes...",
                "Aguarde que vou te mostrar um exemplo real disso funcionando...",
                "Mais à frente você vai entender porque isso é tão importante...",
            ]),
            effectiveness_score: 0.75,
            timing_recommendations: vec![
                TimingMarker::fraction(0.2, "Início de novas seções"),
                TimingMarker::fraction(0.35, "Antes de exemplos práticos"),
                TimingMarker::fraction(0.6, "Transições"),
            ],
            markers: strings(&[
                r"daqui a pouco você vai ver",
                r"em breve vou mostrar",
                r"aguarde que vou",
                r"mais à frente",
            ]),
        },
        EngagementTechnique {
            name: "Social Proof".to_string(),
            technique_type: EngagementType::SocialProof,
            description: "Usar evidência social para aumentar credibilidade".to_string(),
            when_to_use: "Para validar pontos importantes e aumentar confiança".to_string(),
            template: "Não sou só eu dizendo isso. Mais de mil pessoas já aplicaram isso em {topic}..."
                .to_string(),
            examples: strings(&[
                "Não sou só eu dizendo isso. Mais de 1000 pessoas já me mandaram mensagem confirmando...",
                "Olha só esses comentários de pessoas que aplicaram isso...",
                "Semana passada recebi 20 mensagens de pessoas que...",
                "Meus alunos sempre me perguntam sobre isso...",
            ]),
            effectiveness_score: 0.80,
            timing_recommendations: vec![
                TimingMarker::fraction(0.55, "Após fazer afirmações importantes"),
                TimingMarker::fraction(0.5, "Meio do vídeo"),
                TimingMarker::fraction(0.85, "Antes do call-to-action"),
            ],
            markers: strings(&[
                r"não sou só eu",
                r"mais de.*pessoas",
                r"meus.*alunos",
                r"especialistas.*recomendam",
                r"estudos.*mostram",
            ]),
        },
    ]
}
