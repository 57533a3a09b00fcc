use ytscript_models::{NarrativeSection, NarrativeStructure, StructureType};

use super::strings;

fn section(
    name: &str,
    purpose: &str,
    fraction: f64,
    guidance: &str,
    key_elements: &[&str],
    examples: &[&str],
) -> NarrativeSection {
    NarrativeSection {
        name: name.to_string(),
        purpose: purpose.to_string(),
        target_fraction_of_duration: fraction,
        content_guidance: guidance.to_string(),
        key_elements: strings(key_elements),
        examples: strings(examples),
    }
}

pub fn builtin_structures() -> Vec<NarrativeStructure> {
    vec![
        NarrativeStructure {
            name: "Jornada do Herói".to_string(),
            structure_type: StructureType::HeroJourney,
            description: "Estrutura clássica que segue uma jornada de transformação pessoal".to_string(),
            sections: vec![
                section(
                    "Ordinary World",
                    "Estabelecer o status quo e criar identificação",
                    0.10,
                    "Mostre a vida comum antes da mudança para a audiência se reconhecer",
                    &["Situação inicial", "Vida comum", "Identificação com audiência"],
                    &["Eu era apenas mais um iniciante comum...", "Como qualquer pessoa da minha idade..."],
                ),
                section(
                    "Call to Adventure",
                    "Apresentar o desafio ou oportunidade",
                    0.15,
                    "Marque o momento exato em que algo mudou",
                    &["Momento de mudança", "Oportunidade", "Desafio"],
                    &["Até que um dia...", "Foi quando descobri...", "Tudo mudou quando..."],
                ),
                section(
                    "Journey & Challenges",
                    "Mostrar a jornada e os obstáculos",
                    0.50,
                    "Conte os obstáculos em ordem e o que cada um ensinou",
                    &["Obstáculos", "Aprendizados", "Progressão"],
                    &["O primeiro desafio foi...", "Cada erro me ensinou...", "Depois de muito tentar..."],
                ),
                section(
                    "Transformation",
                    "Revelar a mudança e o resultado",
                    0.20,
                    "Contraste o novo estado com o mundo comum do início",
                    &["Resultado", "Transformação", "Novo estado"],
                    &["Hoje posso dizer que...", "A diferença é clara...", "Agora eu entendo..."],
                ),
                section(
                    "Return with Gift",
                    "Compartilhar o aprendizado com a audiência",
                    0.05,
                    "Entregue a lição de forma aplicável",
                    &["Lição", "Aplicação", "Call to action"],
                    &["O que aprendi foi...", "Você também pode...", "Agora é sua vez..."],
                ),
            ],
            best_for: strings(&["desenvolvimento_pessoal", "empreendedorismo", "lifestyle"]),
            engagement_score: 0.90,
            typical_duration: "8-15 minutos".to_string(),
            psychological_principle: "Monomyth - Estrutura narrativa universal que ressoa profundamente com humanos".to_string(),
        },
        NarrativeStructure {
            name: "Problema-Solução".to_string(),
            structure_type: StructureType::ProblemSolution,
            description: "Estrutura focada em identificar problemas e apresentar soluções práticas".to_string(),
            sections: vec![
                section(
                    "Problem Identification",
                    "Identificar e amplificar o problema",
                    0.25,
                    "Descreva o problema com as palavras que a audiência usaria",
                    &["Problema comum", "Dor", "Frustração"],
                    &["Você já passou por isso?", "O problema que todo mundo tem...", "A frustração de..."],
                ),
                section(
                    "Problem Amplification",
                    "Mostrar as consequências do problema",
                    0.20,
                    "Mostre o custo de deixar o problema como está",
                    &["Consequências", "Custos", "Impacto"],
                    &["Se isso continuar...", "O custo de não resolver...", "As pessoas não percebem que..."],
                ),
                section(
                    "Solution Introduction",
                    "Apresentar a solução",
                    0.15,
                    "Apresente a solução antes de detalhar o como",
                    &["Solução", "Método", "Abordagem"],
                    &["A solução é simples...", "Existe uma forma melhor...", "O método que funciona é..."],
                ),
                section(
                    "Solution Explanation",
                    "Explicar como a solução funciona",
                    0.30,
                    "Explique passo a passo com um exemplo concreto",
                    &["Passo a passo", "Exemplos", "Evidências"],
                    &["Primeiro você...", "Veja como funciona...", "O processo é..."],
                ),
                section(
                    "Call to Action",
                    "Motivar a implementação",
                    0.10,
                    "Dê um primeiro passo claro e imediato",
                    &["Próximos passos", "Motivação", "Urgência"],
                    &["Agora é com você...", "Comece hoje mesmo...", "Não espere mais..."],
                ),
            ],
            best_for: strings(&["educacao", "tecnologia", "negocios", "tutoriais"]),
            engagement_score: 0.85,
            typical_duration: "5-12 minutos".to_string(),
            psychological_principle: "Problem-Solution Fit - Criar tensão através do problema e alívio através da solução".to_string(),
        },
        NarrativeStructure {
            name: "Antes e Depois".to_string(),
            structure_type: StructureType::BeforeAfter,
            description: "Estrutura que contrasta a situação anterior com o resultado alcançado".to_string(),
            sections: vec![
                section(
                    "Before State",
                    "Mostrar como era a situação antes",
                    0.25,
                    "Seja específico sobre as limitações do ponto de partida",
                    &["Situação anterior", "Dor", "Limitações"],
                    &["Antes, eu não conseguia...", "Era assim que tudo funcionava..."],
                ),
                section(
                    "Turning Point",
                    "Explicar o que provocou a mudança",
                    0.20,
                    "Mostre a decisão que separou o antes do depois",
                    &["Ponto de virada", "Decisão", "Descoberta"],
                    &["Foi então que decidi...", "A virada aconteceu quando..."],
                ),
                section(
                    "Process",
                    "Mostrar o que foi feito para mudar",
                    0.30,
                    "Descreva as mudanças concretas e o esforço envolvido",
                    &["Mudanças", "Hábitos", "Esforço"],
                    &["A primeira coisa que mudei foi...", "Todos os dias eu..."],
                ),
                section(
                    "After State",
                    "Revelar o resultado e o contraste",
                    0.25,
                    "Apresente provas do resultado lado a lado com o ponto de partida",
                    &["Resultado", "Contraste", "Prova"],
                    &["Hoje a situação é outra...", "Olha a diferença..."],
                ),
            ],
            best_for: strings(&["saude", "lifestyle", "financas", "desenvolvimento_pessoal"]),
            engagement_score: 0.80,
            typical_duration: "5-10 minutos".to_string(),
            psychological_principle: "Contrast Effect - Diferenças lado a lado tornam o resultado mais memorável".to_string(),
        },
        NarrativeStructure {
            name: "Formato Lista".to_string(),
            structure_type: StructureType::ListFormat,
            description: "Estrutura baseada em listas numeradas ou com bullet points".to_string(),
            sections: vec![
                section(
                    "Introduction & Promise",
                    "Prometer valor e estabelecer expectativas",
                    0.15,
                    "Diga quantos itens virão e o que a audiência ganha com eles",
                    &["Promessa", "Benefícios", "Preview"],
                    &["5 estratégias que vão...", "Os segredos que mudaram...", "Tudo que você precisa saber sobre..."],
                ),
                section(
                    "Item Development",
                    "Desenvolver cada item da lista",
                    0.70,
                    "Cada item tem explicação e exemplo próprios",
                    &["Itens numerados", "Explicações", "Exemplos"],
                    &["Primeiro...", "Segundo ponto...", "A terceira estratégia é..."],
                ),
                section(
                    "Summary & Next Steps",
                    "Resumir e dar próximos passos",
                    0.15,
                    "Recapitule os itens em uma frase cada",
                    &["Resumo", "Recapitulação", "Ação"],
                    &["Recapitulando...", "Em resumo...", "Agora que você sabe..."],
                ),
            ],
            best_for: strings(&["educacao", "dicas", "reviews", "comparacoes"]),
            engagement_score: 0.75,
            typical_duration: "3-10 minutos".to_string(),
            psychological_principle: "Cognitive Ease - Listas são fáceis de processar e lembrar".to_string(),
        },
        NarrativeStructure {
            name: "Tutorial Passo a Passo".to_string(),
            structure_type: StructureType::TutorialStep,
            description: "Estrutura que ensina um processo em etapas práticas e verificáveis".to_string(),
            sections: vec![
                section(
                    "Overview",
                    "Mostrar o objetivo e o resultado final",
                    0.15,
                    "Mostre o resultado final antes do primeiro passo",
                    &["Objetivo", "Resultado final", "Pré-requisitos"],
                    &["Hoje vamos construir...", "No final você vai ter..."],
                ),
                section(
                    "Setup",
                    "Preparar ferramentas e ambiente",
                    0.15,
                    "Liste tudo o que precisa estar pronto antes de começar",
                    &["Ferramentas", "Preparação", "Configuração"],
                    &["Antes de começar, você vai precisar de...", "A primeira coisa é preparar..."],
                ),
                section(
                    "Step by Step",
                    "Executar cada etapa com demonstração",
                    0.50,
                    "Uma etapa por vez, com o erro mais comum de cada uma",
                    &["Passo a passo", "Demonstração", "Erros comuns"],
                    &["Primeiro passo...", "Agora repare neste detalhe...", "O erro mais comum aqui é..."],
                ),
                section(
                    "Review & Next Steps",
                    "Revisar o que foi feito e propor o próximo desafio",
                    0.20,
                    "Revise o caminho e proponha um desafio para praticar",
                    &["Revisão", "Próximos passos", "Desafio"],
                    &["Vamos revisar o que fizemos...", "Seu desafio agora é..."],
                ),
            ],
            best_for: strings(&["tecnologia", "tutoriais", "educacao"]),
            engagement_score: 0.82,
            typical_duration: "6-15 minutos".to_string(),
            psychological_principle: "Self-Efficacy - Pequenas vitórias sucessivas aumentam a confiança para continuar".to_string(),
        },
        NarrativeStructure {
            name: "História e Lição".to_string(),
            structure_type: StructureType::StoryLesson,
            description: "Estrutura que conta uma história e extrai dela uma lição aplicável".to_string(),
            sections: vec![
                section(
                    "Setting",
                    "Apresentar o contexto e os personagens",
                    0.20,
                    "Situe a audiência no tempo e no lugar da história",
                    &["Contexto", "Personagens", "Situação inicial"],
                    &["Era uma vez...", "Tudo começou quando..."],
                ),
                section(
                    "Story",
                    "Desenvolver o conflito até a virada",
                    0.45,
                    "Aumente a tensão até o momento decisivo",
                    &["Conflito", "Tensão", "Virada"],
                    &["O problema surgiu quando...", "Foi aí que tudo mudou..."],
                ),
                section(
                    "Lesson",
                    "Extrair a lição da história",
                    0.25,
                    "Conecte a lição à vida da audiência",
                    &["Lição", "Reflexão", "Aplicação"],
                    &["A lição mais importante foi...", "O que eu aprendi com isso..."],
                ),
                section(
                    "Takeaway",
                    "Resumir e convidar à ação",
                    0.10,
                    "Feche com uma frase que a audiência possa repetir",
                    &["Resumo", "Convite", "Ação"],
                    &["Resumindo...", "Então da próxima vez..."],
                ),
            ],
            best_for: strings(&["desenvolvimento_pessoal", "lifestyle", "negocios"]),
            engagement_score: 0.78,
            typical_duration: "4-10 minutos".to_string(),
            psychological_principle: "Narrative Persuasion - Lições embutidas em histórias são aceitas com menos resistência".to_string(),
        },
        NarrativeStructure {
            name: "Comparação".to_string(),
            structure_type: StructureType::CompareContrast,
            description: "Estrutura que compara opções com critérios claros até um veredito".to_string(),
            sections: vec![
                section(
                    "Introduction of Options",
                    "Apresentar as opções e os critérios",
                    0.15,
                    "Defina os critérios antes de falar de qualquer opção",
                    &["Opções", "Critérios", "Contexto"],
                    &["Hoje vamos comparar...", "Existem duas formas de..."],
                ),
                section(
                    "Option A",
                    "Analisar a primeira opção",
                    0.30,
                    "Avalie a primeira opção pelos critérios definidos",
                    &["Vantagens", "Desvantagens", "Exemplos"],
                    &["Começando pela primeira opção...", "A grande vantagem aqui é..."],
                ),
                section(
                    "Option B",
                    "Analisar a segunda opção",
                    0.30,
                    "Use exatamente os mesmos critérios da primeira opção",
                    &["Pontos fortes", "Pontos fracos", "Casos de uso"],
                    &["Agora a segunda opção...", "Do outro lado temos..."],
                ),
                section(
                    "Verdict",
                    "Dar o veredito e a recomendação",
                    0.25,
                    "Recomende uma opção para cada perfil de audiência",
                    &["Comparação direta", "Recomendação", "Veredito"],
                    &["No fim das contas...", "Minha recomendação é..."],
                ),
            ],
            best_for: strings(&["tecnologia", "reviews", "comparacoes", "financas"]),
            engagement_score: 0.72,
            typical_duration: "6-12 minutos".to_string(),
            psychological_principle: "Choice Architecture - Critérios explícitos reduzem a paralisia de decisão".to_string(),
        },
        NarrativeStructure {
            name: "Cronológica".to_string(),
            structure_type: StructureType::Chronological,
            description: "Estrutura que segue os acontecimentos em ordem temporal".to_string(),
            sections: vec![
                section(
                    "Origins",
                    "Mostrar onde tudo começou",
                    0.20,
                    "Comece pelo contexto que tornou a história possível",
                    &["Origem", "Contexto histórico", "Primeiros passos"],
                    &["Tudo começou em...", "No início..."],
                ),
                section(
                    "Development",
                    "Acompanhar a evolução e os marcos",
                    0.35,
                    "Avance marco a marco sem pular etapas",
                    &["Evolução", "Marcos", "Conflitos"],
                    &["Alguns anos depois...", "O próximo marco foi..."],
                ),
                section(
                    "Turning Points",
                    "Destacar as viradas decisivas",
                    0.25,
                    "Explique o impacto de cada virada no que veio depois",
                    &["Virada", "Consequências", "Impacto"],
                    &["Tudo mudou quando...", "A consequência disso foi..."],
                ),
                section(
                    "Present Day",
                    "Conectar a história ao presente",
                    0.20,
                    "Mostre o que ficou da história e o que vem pela frente",
                    &["Situação atual", "Legado", "Futuro"],
                    &["Hoje...", "E o futuro?"],
                ),
            ],
            best_for: strings(&["historia", "entretenimento", "educacao"]),
            engagement_score: 0.70,
            typical_duration: "8-20 minutos".to_string(),
            psychological_principle: "Serial Position Effect - Sequências temporais facilitam a memorização".to_string(),
        },
    ]
}
